//! XML webservice responses decoded into generic JSON mappings.
//!
//! The informational webservice answers with XML documents whose shape
//! varies per operation, so callers get a nested `serde_json` mapping keyed
//! by element name. Repeated sibling elements become arrays, attributes
//! land under `"@attributes"`, and numeric-looking text becomes JSON
//! numbers. The root element's name is dropped; its children form the
//! returned mapping.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors from XML decoding.
#[derive(Debug, Error)]
pub enum XmlDecodeError {
    #[error("Malformed XML: {0}")]
    Malformed(String),
}

impl From<quick_xml::Error> for XmlDecodeError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Decodes an XML document into a mapping of the root element's children.
pub fn xml_to_map(xml: &str) -> Result<Map<String, Value>, XmlDecodeError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    // Open elements: (local name, attributes and children, text so far).
    let mut stack: Vec<(String, Map<String, Value>, String)> = Vec::new();
    let mut root: Option<Map<String, Value>> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = local_name(start.name().as_ref());
                let mut node = Map::new();
                let attributes = read_attributes(&start)?;
                if !attributes.is_empty() {
                    node.insert("@attributes".to_string(), Value::Object(attributes));
                }
                stack.push((name, node, String::new()));
            }
            Event::Empty(start) => {
                let name = local_name(start.name().as_ref());
                let mut node = Map::new();
                let attributes = read_attributes(&start)?;
                if !attributes.is_empty() {
                    node.insert("@attributes".to_string(), Value::Object(attributes));
                }
                let value = finish_node(node, String::new());
                attach(&mut stack, &mut root, name, value);
            }
            Event::Text(text) => {
                if let Some((_, _, buffer)) = stack.last_mut() {
                    buffer.push_str(&text.unescape()?);
                }
            }
            Event::CData(cdata) => {
                if let Some((_, _, buffer)) = stack.last_mut() {
                    buffer.push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                }
            }
            Event::End(_) => {
                let (name, node, text) = stack
                    .pop()
                    .ok_or_else(|| XmlDecodeError::Malformed("unbalanced closing tag".into()))?;
                let value = finish_node(node, text);
                attach(&mut stack, &mut root, name, value);
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions.
            _ => {}
        }
    }

    Ok(root.unwrap_or_default())
}

/// Folds a closed element into a value: pure text becomes a coerced
/// scalar, anything with attributes or children becomes an object.
fn finish_node(node: Map<String, Value>, text: String) -> Value {
    if node.is_empty() {
        coerce_scalar(text)
    } else {
        Value::Object(node)
    }
}

/// Inserts a closed element into its parent, or promotes it to the root
/// mapping when the stack is empty.
fn attach(
    stack: &mut [(String, Map<String, Value>, String)],
    root: &mut Option<Map<String, Value>>,
    name: String,
    value: Value,
) {
    if let Some((_, parent, _)) = stack.last_mut() {
        insert_child(parent, name, value);
    } else {
        *root = Some(match value {
            Value::Object(map) => map,
            scalar => {
                let mut map = Map::new();
                map.insert(name, scalar);
                map
            }
        });
    }
}

/// Repeated sibling elements collapse into an array under their shared key.
fn insert_child(map: &mut Map<String, Value>, name: String, value: Value) {
    match map.get_mut(&name) {
        None => {
            map.insert(name, value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}

fn read_attributes(start: &BytesStart<'_>) -> Result<Map<String, Value>, XmlDecodeError> {
    let mut out = Map::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| XmlDecodeError::Malformed(e.to_string()))?;
        let key = local_name(attribute.key.as_ref());
        let value = attribute.unescape_value()?.into_owned();
        out.insert(key, coerce_scalar(value));
    }
    Ok(out)
}

/// Element name with any namespace prefix stripped.
fn local_name(raw: &[u8]) -> String {
    let start = raw.iter().rposition(|b| *b == b':').map_or(0, |i| i + 1);
    String::from_utf8_lossy(&raw[start..]).into_owned()
}

/// Numeric-looking text becomes a JSON number, everything else a string.
fn coerce_scalar(text: String) -> Value {
    if let Ok(integer) = text.parse::<i64>() {
        return integer.into();
    }
    if looks_numeric(&text) {
        if let Ok(float) = text.parse::<f64>() {
            if float.is_finite() {
                if let Some(value) = serde_json::Number::from_f64(float) {
                    return Value::Number(value);
                }
            }
        }
    }
    Value::String(text)
}

/// Guards the float parse against words `f64::from_str` accepts, like
/// `"inf"` and `"NaN"`.
fn looks_numeric(text: &str) -> bool {
    let rest = text.strip_prefix(['+', '-']).unwrap_or(text);
    rest.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_document_maps_children() {
        let map = xml_to_map("<Result><Code>0</Code><Description>ok</Description></Result>")
            .unwrap();
        assert_eq!(map["Code"], json!(0));
        assert_eq!(map["Description"], json!("ok"));
    }

    #[test]
    fn nested_elements_become_objects() {
        let map = xml_to_map(
            "<OperationStateResponse>\
               <Result><Code>0</Code></Result>\
               <State><Code>100</Code><RequestDate>2024-01-15</RequestDate></State>\
             </OperationStateResponse>",
        )
        .unwrap();
        assert_eq!(map["Result"]["Code"], json!(0));
        assert_eq!(map["State"]["Code"], json!(100));
        assert_eq!(map["State"]["RequestDate"], json!("2024-01-15"));
    }

    #[test]
    fn repeated_siblings_become_arrays() {
        let map = xml_to_map(
            "<Groups>\
               <Group><Code>a</Code></Group>\
               <Group><Code>b</Code></Group>\
               <Group><Code>c</Code></Group>\
             </Groups>",
        )
        .unwrap();
        let groups = map["Group"].as_array().unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[1]["Code"], json!("b"));
    }

    #[test]
    fn attributes_are_captured() {
        let map = xml_to_map(r#"<Rates><Rate IncSum="100" Label="BankCard"/></Rates>"#).unwrap();
        assert_eq!(map["Rate"]["@attributes"]["IncSum"], json!(100));
        assert_eq!(map["Rate"]["@attributes"]["Label"], json!("BankCard"));
    }

    #[test]
    fn numeric_text_is_coerced() {
        let map = xml_to_map("<R><I>42</I><F>10.50</F><S>12abc</S><N>-7</N></R>").unwrap();
        assert_eq!(map["I"], json!(42));
        assert_eq!(map["F"], json!(10.5));
        assert_eq!(map["S"], json!("12abc"));
        assert_eq!(map["N"], json!(-7));
    }

    #[test]
    fn inf_and_nan_words_stay_strings() {
        let map = xml_to_map("<R><A>inf</A><B>NaN</B></R>").unwrap();
        assert_eq!(map["A"], json!("inf"));
        assert_eq!(map["B"], json!("NaN"));
    }

    #[test]
    fn empty_elements_become_empty_strings() {
        let map = xml_to_map("<R><A/><B></B></R>").unwrap();
        assert_eq!(map["A"], json!(""));
        assert_eq!(map["B"], json!(""));
    }

    #[test]
    fn namespace_prefixes_are_stripped() {
        let map =
            xml_to_map(r#"<ns:Result xmlns:ns="urn:x"><ns:Code>0</ns:Code></ns:Result>"#).unwrap();
        assert_eq!(map["Code"], json!(0));
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(xml_to_map("<Result><Code>0</Result>").is_err());
    }

    #[test]
    fn empty_document_yields_empty_map() {
        assert!(xml_to_map("").unwrap().is_empty());
    }
}
