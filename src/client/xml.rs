use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A parsed XML element: name, attributes, direct text, children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// Text and CDATA directly inside this element, concatenated as written.
    /// Mixed content such as `a<b/>c` yields `ac`. Whitespace-only text is
    /// dropped when the element has children.
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first direct child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.as_str())
    }

    /// Follow a `/`-separated path of child names, e.g. `result/nome`.
    pub fn find(&self, path: &str) -> Option<&XmlElement> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(self, |el, name| el.child(name))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

fn utf8(bytes: &[u8]) -> Result<String, String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| format!("invalid UTF-8: {e}"))
}

fn open(e: &BytesStart<'_>) -> Result<XmlElement, String> {
    let mut el = XmlElement {
        name: utf8(e.name().as_ref())?,
        ..XmlElement::default()
    };
    for attr in e.attributes() {
        let attr = attr.map_err(|e| format!("bad attribute: {e}"))?;
        let value = attr
            .unescape_value()
            .map_err(|e| format!("bad attribute value: {e}"))?;
        el.attributes
            .push((utf8(attr.key.as_ref())?, value.into_owned()));
    }
    Ok(el)
}

/// Attach a finished element to its parent, or make it the root.
fn close(
    el: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<(), String> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None if root.is_none() => *root = Some(el),
        None => return Err("more than one root element".into()),
    }
    Ok(())
}

/// Parse a complete document into its root element.
pub(crate) fn parse_document(xml: &str) -> Result<XmlElement, String> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if root.is_some() && stack.is_empty() {
                    return Err("more than one root element".into());
                }
                stack.push(open(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let el = open(e)?;
                close(el, &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                let mut el = stack.pop().ok_or("unexpected closing tag")?;
                if !el.children.is_empty() && el.text.trim().is_empty() {
                    el.text.clear();
                }
                close(el, &mut stack, &mut root)?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(|e| format!("bad text: {e}"))?;
                match stack.last_mut() {
                    Some(el) => el.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => return Err("text outside the root element".into()),
                }
            }
            Ok(Event::CData(ref e)) => {
                let text = utf8(&e.clone().into_inner())?;
                if let Some(el) = stack.last_mut() {
                    el.text.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(format!("XML parse error: {e}")),
            _ => {}
        }
    }

    if let Some(el) = stack.last() {
        return Err(format!("unclosed element <{}>", el.name));
    }
    root.ok_or_else(|| "document has no root element".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_document() {
        let doc = parse_document(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <root>
              <status>true</status>
              <return>OK</return>
              <result kind="pj"><nome>ACME &amp; CIA</nome><uf>SP</uf></result>
            </root>"#,
        )
        .unwrap();
        assert_eq!(doc.name, "root");
        assert_eq!(doc.child_text("return"), Some("OK"));
        assert_eq!(doc.find("result/nome").map(|e| e.text.as_str()), Some("ACME & CIA"));
        assert_eq!(doc.child("result").and_then(|r| r.attribute("kind")), Some("pj"));
    }

    #[test]
    fn cdata_becomes_text() {
        let doc =
            parse_document("<root><message><![CDATA[Token inválido]]></message></root>").unwrap();
        assert_eq!(doc.child_text("message"), Some("Token inválido"));
    }

    #[test]
    fn empty_elements_are_children() {
        let doc = parse_document("<root><result/></root>").unwrap();
        assert!(doc.child("result").is_some());
        assert_eq!(doc.child_text("result"), Some(""));
    }

    #[test]
    fn leaf_text_is_kept_verbatim() {
        let doc = parse_document("<root>\n  <return> NOK </return>\n  <m>a<b/>c</m>\n</root>").unwrap();
        assert_eq!(doc.text, "");
        assert_eq!(doc.child_text("return"), Some(" NOK "));
        assert_eq!(doc.child_text("m"), Some("ac"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_document("").is_err());
        assert!(parse_document("not xml at all").is_err());
        assert!(parse_document("<root><a></root>").is_err());
        assert!(parse_document("<root>").is_err());
        assert!(parse_document("<a/><b/>").is_err());
        assert!(parse_document("{\"return\":\"OK\"}").is_err());
    }
}
