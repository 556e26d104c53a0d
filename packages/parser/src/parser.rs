use crate::ast::*;
use crate::error::{FormatError, ParseResult, ParseWarning};
use crate::tokenizer::{lex_line, LexedLine};

/// Successful parse plus everything that was tolerated along the way
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub document: Document,
    pub warnings: Vec<ParseWarning>,
}

struct SourceLine<'src> {
    number: usize,
    raw: &'src str,
    lexed: LexedLine<'src>,
}

/// Parser for level files
pub struct Parser<'src> {
    lines: Vec<SourceLine<'src>>,
    pos: usize,
    warnings: Vec<ParseWarning>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let lines = source
            .lines()
            .enumerate()
            .map(|(index, raw)| SourceLine {
                number: index + 1,
                raw,
                lexed: lex_line(raw),
            })
            .collect();

        Self {
            lines,
            pos: 0,
            warnings: Vec::new(),
        }
    }

    /// Parse a complete document
    pub fn parse_document(mut self) -> ParseResult<ParseOutput> {
        let header = self.parse_header()?;
        let root = self.parse_objects()?;

        Ok(ParseOutput {
            document: Document { header, root },
            warnings: self.warnings,
        })
    }

    /// Consume header lines up to and including the `#` separator
    fn parse_header(&mut self) -> ParseResult<Header> {
        let mut header = Header::default();
        let mut version = None;

        loop {
            let Some(line) = self.lines.get(self.pos) else {
                return Err(FormatError::MissingSeparator);
            };
            self.pos += 1;

            if let Some(comment) = line.lexed.sole_comment() {
                header.title = Some(comment.trim().to_string()).filter(|t| !t.is_empty());
                continue;
            }

            let words = line.lexed.words();
            let Some((keyword, args)) = words.split_first() else {
                continue;
            };

            if *keyword == "#" && args.is_empty() {
                break;
            }

            let mut fields = Fields::new(line.number, args);
            match keyword.to_ascii_lowercase().as_str() {
                "version" => {
                    let value = fields.int("version")?;
                    version = Some(
                        u32::try_from(value)
                            .ok()
                            .filter(|v| *v > 0)
                            .ok_or_else(|| {
                                FormatError::malformed(line.number, "version", value.to_string())
                            })?,
                    );
                }
                "shed" => header.shed = true,
                "inner_push" => header.inner_push = true,
                "draw_style" => {
                    let token = fields.word("draw style")?;
                    header.draw_style = Some(token.parse().map_err(|_| {
                        FormatError::malformed(line.number, "draw style", token)
                    })?);
                }
                "attempt_order" => {
                    header.attempt_order = Some(fields.word("attempt order")?.to_string());
                }
                "custom_level_music" => {
                    header.custom_level_music = Some(fields.int("custom level music")?);
                }
                "custom_level_palette" => {
                    header.custom_level_palette = Some(fields.int("custom level palette")?);
                }
                _ => self.warnings.push(ParseWarning::UnknownDirective {
                    line: line.number,
                    directive: keyword.to_string(),
                }),
            }
        }

        header.version = version.ok_or(FormatError::MissingVersion)?;
        Ok(header)
    }

    /// Rebuild the object tree from indentation using a stack of open Blocks
    fn parse_objects(&mut self) -> ParseResult<Block> {
        let mut stack: Vec<Block> = Vec::new();

        while let Some(line) = self.lines.get(self.pos) {
            self.pos += 1;

            let words = line.lexed.words();
            if words.is_empty() {
                continue;
            }

            let Some(object) = parse_object(line.number, &words)? else {
                self.warnings.push(ParseWarning::UnknownVariant {
                    line: line.number,
                    keyword: words[0].to_string(),
                });
                continue;
            };

            if line.lexed.depth == 0 {
                let LevelObject::Block(block) = object else {
                    return Err(FormatError::invalid_root(line.number, line.raw.trim()));
                };
                if !stack.is_empty() {
                    self.warnings.push(ParseWarning::RootReplaced { line: line.number });
                }
                stack.clear();
                stack.push(block);
                continue;
            }

            if stack.is_empty() {
                return Err(FormatError::invalid_root(line.number, line.raw.trim()));
            }

            let mut depth = line.lexed.depth;
            if depth > stack.len() {
                self.warnings.push(ParseWarning::DepthClamped {
                    line: line.number,
                    from: depth,
                    to: stack.len(),
                });
                depth = stack.len();
            }

            close_blocks(&mut stack, depth);

            match object {
                LevelObject::Block(block) => stack.push(block),
                other => {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(other);
                    }
                }
            }
        }

        close_blocks(&mut stack, 1);
        stack.pop().ok_or(FormatError::MissingRoot)
    }
}

/// Pop open Blocks into their parents until `depth` remain
fn close_blocks(stack: &mut Vec<Block>, depth: usize) {
    while stack.len() > depth.max(1) {
        let Some(block) = stack.pop() else { break };
        if let Some(parent) = stack.last_mut() {
            parent.children.push(LevelObject::Block(block));
        }
    }
}

/// Parse one object line. `Ok(None)` means the keyword is unknown.
fn parse_object(line: usize, words: &[&str]) -> ParseResult<Option<LevelObject>> {
    let (keyword, args) = match words.split_first() {
        Some(split) => split,
        None => return Ok(None),
    };
    let mut fields = Fields::new(line, args);

    let object = match keyword.to_ascii_lowercase().as_str() {
        "block" => LevelObject::Block(Block {
            x: fields.coord("x")?,
            y: fields.coord("y")?,
            id: fields.block_id("id")?,
            width: fields.extent("width")?,
            height: fields.extent("height")?,
            hue: fields.real("hue")?,
            sat: fields.real("sat")?,
            val: fields.real("val")?,
            zoom_factor: fields.real("zoom factor")?,
            fill_with_walls: fields.flag("fill with walls")?,
            player: fields.flag("player")?,
            possessable: fields.flag("possessable")?,
            player_order: fields.coord("player order")?,
            flip_h: fields.flag("flip h")?,
            float_in_space: fields.flag("float in space")?,
            special_effect: fields.coord("special effect")?,
            children: Vec::new(),
        }),
        "wall" => LevelObject::Wall(Wall {
            x: fields.coord("x")?,
            y: fields.coord("y")?,
            player: fields.flag("player")?,
            possessable: fields.flag("possessable")?,
            player_order: fields.coord("player order")?,
        }),
        "floor" => {
            let x = fields.coord("x")?;
            let y = fields.coord("y")?;
            let token = fields.word("floor type")?;
            let floor_type: FloorType = token
                .parse()
                .map_err(|_| FormatError::malformed(line, "floor type", token))?;
            let info_text = match floor_type {
                FloorType::Info => decode_info_text(fields.rest()),
                _ => None,
            };
            LevelObject::Floor(Floor {
                x,
                y,
                floor_type,
                info_text,
            })
        }
        "ref" => LevelObject::Ref(Ref {
            x: fields.coord("x")?,
            y: fields.coord("y")?,
            target_id: fields.int("target id")?,
            exit_block: fields.flag("exit block")?,
            inf_exit: fields.coord("inf exit")?,
            inf_exit_num: fields.coord("inf exit num")?,
            inf_enter: fields.coord("inf enter")?,
            inf_enter_num: fields.coord("inf enter num")?,
            inf_enter_id: fields.int("inf enter id")?,
            player: fields.flag("player")?,
            possessable: fields.flag("possessable")?,
            player_order: fields.coord("player order")?,
            flip_h: fields.flag("flip h")?,
            float_in_space: fields.flag("float in space")?,
            special_effect: fields.coord("special effect")?,
        }),
        _ => return Ok(None),
    };

    Ok(Some(object))
}

/// Info text travels as space-joined tokens with `\n` and `_` escapes
fn decode_info_text(tokens: &[&str]) -> Option<String> {
    let text = tokens.join(" ").replace("\\n", "\n").replace('_', " ");
    Some(text).filter(|t| !t.is_empty())
}

/// Positional field reader over the tokens of one line
struct Fields<'a, 'src> {
    line: usize,
    tokens: &'a [&'src str],
    pos: usize,
}

impl<'a, 'src> Fields<'a, 'src> {
    fn new(line: usize, tokens: &'a [&'src str]) -> Self {
        Self {
            line,
            tokens,
            pos: 0,
        }
    }

    fn word(&mut self, field: &'static str) -> ParseResult<&'src str> {
        let token = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or_else(|| FormatError::missing(self.line, field))?;
        self.pos += 1;
        Ok(token)
    }

    /// Remaining tokens, consumed
    fn rest(&mut self) -> &'a [&'src str] {
        let rest = &self.tokens[self.pos.min(self.tokens.len())..];
        self.pos = self.tokens.len();
        rest
    }

    fn int(&mut self, field: &'static str) -> ParseResult<i64> {
        let token = self.word(field)?;
        parse_int(token).ok_or_else(|| FormatError::malformed(self.line, field, token))
    }

    fn coord(&mut self, field: &'static str) -> ParseResult<i32> {
        let token = self.word(field)?;
        parse_int(token)
            .and_then(|value| i32::try_from(value).ok())
            .ok_or_else(|| FormatError::malformed(self.line, field, token))
    }

    fn block_id(&mut self, field: &'static str) -> ParseResult<BlockId> {
        let token = self.word(field)?;
        parse_int(token)
            .filter(|id| *id >= 0)
            .ok_or_else(|| FormatError::malformed(self.line, field, token))
    }

    fn extent(&mut self, field: &'static str) -> ParseResult<u32> {
        let token = self.word(field)?;
        parse_int(token)
            .and_then(|value| u32::try_from(value).ok())
            .filter(|value| *value > 0)
            .ok_or_else(|| FormatError::malformed(self.line, field, token))
    }

    fn real(&mut self, field: &'static str) -> ParseResult<f64> {
        let token = self.word(field)?;
        token
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| FormatError::malformed(self.line, field, token))
    }

    fn flag(&mut self, field: &'static str) -> ParseResult<bool> {
        Ok(self.int(field)? != 0)
    }
}

/// Integer parsing that also accepts integral reals such as `1.0`
fn parse_int(token: &str) -> Option<i64> {
    token.parse::<i64>().ok().or_else(|| {
        token
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && value.fract() == 0.0)
            .filter(|value| value.abs() < i64::MAX as f64)
            .map(|value| value as i64)
    })
}

/// Parse a level, logging tolerated issues
pub fn parse(source: &str) -> ParseResult<Document> {
    let output = parse_with_warnings(source)?;
    for warning in &output.warnings {
        tracing::warn!(line = warning.line(), "{}", warning);
    }
    Ok(output.document)
}

/// Parse a level and return tolerated issues alongside the document
pub fn parse_with_warnings(source: &str) -> ParseResult<ParseOutput> {
    Parser::new(source).parse_document()
}
