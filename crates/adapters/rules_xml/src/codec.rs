//! XML encoding of a [`RuleSet`].
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <ecpemuserver>
//!   <rules>
//!     <rule>
//!       <Name>New Rule</Name>
//!       <Button>None</Button>
//!       <Action>HttpGET</Action>
//!       <EndPoint>https://www.example.com/</EndPoint>
//!       <ExData> </ExData>
//!     </rule>
//!   </rules>
//! </ecpemuserver>
//! ```
//!
//! Field text is kept verbatim, whitespace included. Attributes and unknown
//! elements are ignored, missing fields keep their defaults, and a root
//! without `<rules>` decodes to an empty set.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use keyrelay_domain::rule::Rule;
use keyrelay_domain::rule_set::RuleSet;

use crate::error::RulesXmlError;

pub const ROOT: &str = "ecpemuserver";
const RULES: &str = "rules";
const RULE: &str = "rule";
const NAME: &str = "Name";
const BUTTON: &str = "Button";
const ACTION: &str = "Action";
const END_POINT: &str = "EndPoint";
const EX_DATA: &str = "ExData";

/// Encode `rules` as an indented XML document.
///
/// # Errors
///
/// Returns [`RulesXmlError`] if the writer fails.
pub fn encode(rules: &RuleSet) -> Result<String, RulesXmlError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT)))?;
    writer.write_event(Event::Start(BytesStart::new(RULES)))?;
    for rule in rules {
        writer.write_event(Event::Start(BytesStart::new(RULE)))?;
        write_field(&mut writer, NAME, &rule.name)?;
        write_field(&mut writer, BUTTON, &rule.trigger)?;
        write_field(&mut writer, ACTION, rule.action.as_str())?;
        write_field(&mut writer, END_POINT, &rule.endpoint)?;
        write_field(&mut writer, EX_DATA, &rule.extra_data)?;
        writer.write_event(Event::End(BytesEnd::new(RULE)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(RULES)))?;
    writer.write_event(Event::End(BytesEnd::new(ROOT)))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

fn write_field(writer: &mut Writer<Vec<u8>>, tag: &str, value: &str) -> Result<(), RulesXmlError> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Decode an XML document into a [`RuleSet`].
///
/// # Errors
///
/// Returns [`RulesXmlError`] when the document is empty, not well-formed,
/// has an unexpected root, or names an unknown action.
pub fn decode(xml: &str) -> Result<RuleSet, RulesXmlError> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut decoder = Decoder::default();
    loop {
        match reader.read_event()? {
            Event::Start(e) => decoder.open(element_name(&e))?,
            Event::Empty(e) => {
                decoder.open(element_name(&e))?;
                decoder.close()?;
            }
            Event::End(_) => decoder.close()?,
            Event::Text(t) => decoder.text.push_str(&t.unescape()?),
            Event::CData(c) => decoder.text.push_str(&String::from_utf8_lossy(&c)),
            Event::Eof => break,
            _ => {}
        }
    }
    decoder.finish()
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

/// Tracks the open element path while streaming events.
#[derive(Default)]
struct Decoder {
    path: Vec<String>,
    text: String,
    current: Option<Rule>,
    rules: Vec<Rule>,
    seen_root: bool,
}

impl Decoder {
    fn open(&mut self, name: String) -> Result<(), RulesXmlError> {
        if self.path.is_empty() {
            if name != ROOT {
                return Err(RulesXmlError::UnexpectedRoot {
                    expected: ROOT,
                    found: name,
                });
            }
            self.seen_root = true;
        }
        self.path.push(name);
        if self.in_rule() {
            self.current = Some(Rule::default());
        }
        self.text.clear();
        Ok(())
    }

    fn close(&mut self) -> Result<(), RulesXmlError> {
        let text = std::mem::take(&mut self.text);
        let Some(closed) = self.path.pop() else {
            return Ok(());
        };
        if self.in_rule() {
            if let Some(rule) = self.current.as_mut() {
                assign_field(rule, &closed, text)?;
            }
        } else if self.in_rules() && closed == RULE {
            if let Some(rule) = self.current.take() {
                self.rules.push(rule);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<RuleSet, RulesXmlError> {
        if let Some(open) = self.path.last() {
            return Err(RulesXmlError::Truncated(open.clone()));
        }
        if !self.seen_root {
            return Err(RulesXmlError::MissingRoot);
        }
        Ok(self.rules.into())
    }

    fn in_rules(&self) -> bool {
        matches!(self.path.as_slice(), [root, rules] if root == ROOT && rules == RULES)
    }

    fn in_rule(&self) -> bool {
        matches!(
            self.path.as_slice(),
            [root, rules, rule] if root == ROOT && rules == RULES && rule == RULE
        )
    }
}

fn assign_field(rule: &mut Rule, field: &str, text: String) -> Result<(), RulesXmlError> {
    match field {
        NAME => rule.name = text,
        BUTTON => rule.trigger = text,
        ACTION => rule.action = text.trim().parse()?,
        END_POINT => rule.endpoint = text,
        EX_DATA => rule.extra_data = text,
        _ => tracing::debug!(field, "ignoring unknown rule field"),
    }
    Ok(())
}
