// src/backend/services/descriptor.rs
//! Descriptor documents: a record's metadata as a JSON document carried
//! inside a `data:` URI, so the result is usable directly as a content
//! reference without a second fetch.

use crate::models::{common::DescriptorEncoding, Record};
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const DATA_URI_PREFIX: &str = "data:application/json;base64,";

/// Renders the descriptor document for `record`.
///
/// Field order is fixed: name, description, external_url, image, attributes.
/// With [`DescriptorEncoding::Verbatim`] free-text fields are copied as-is,
/// so a `"` or `\` in a field yields a broken document. With
/// [`DescriptorEncoding::Escaped`] they are emitted as JSON string literals;
/// for text without quotes, backslashes or control characters both modes
/// produce the same bytes.
pub fn render_document(record: &Record, encoding: DescriptorEncoding) -> String {
    let text = |value: &str| match encoding {
        DescriptorEncoding::Verbatim => format!("\"{}\"", value),
        DescriptorEncoding::Escaped => serde_json::Value::String(value.to_owned()).to_string(),
    };

    format!(
        concat!(
            "{{",
            "\"name\":{},",
            "\"description\":{},",
            "\"external_url\":{},",
            "\"image\":{},",
            "\"attributes\":[{{",
            "\"display_type\":\"number\",",
            "\"trait_type\":\"Timestamp\",",
            "\"value\":{}",
            "}}]",
            "}}"
        ),
        text(record.label.as_str()),
        text(&record.description),
        text(&record.file_ref),
        text(&record.image_ref),
        record.last_modified
    )
}

/// Wraps a document as a self-describing base64 data URI.
pub fn to_data_uri(document: &str) -> String {
    format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(document.as_bytes()))
}

/// Renders and wraps in one step. Nothing is cached.
pub fn resolve(record: &Record, encoding: DescriptorEncoding) -> String {
    to_data_uri(&render_document(record, encoding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;
    use proptest::prelude::*;

    fn resume() -> Record {
        Record {
            last_modified: 1_700_000_000,
            label: Label::new("Resume"),
            description: "My resume".to_string(),
            file_ref: "https://x/resume.pdf".to_string(),
            image_ref: "https://x/img.jpg".to_string(),
        }
    }

    fn decode(uri: &str) -> String {
        let payload = uri.strip_prefix(DATA_URI_PREFIX).expect("data uri prefix");
        String::from_utf8(STANDARD.decode(payload).expect("valid base64")).expect("utf-8 document")
    }

    #[test]
    fn document_has_fixed_layout() {
        let expected = concat!(
            r#"{"name":"Resume","description":"My resume","#,
            r#""external_url":"https://x/resume.pdf","image":"https://x/img.jpg","#,
            r#""attributes":[{"display_type":"number","trait_type":"Timestamp","value":1700000000}]}"#
        );
        assert_eq!(render_document(&resume(), DescriptorEncoding::Verbatim), expected);
    }

    #[test]
    fn data_uri_decodes_to_parsable_json() {
        let uri = resolve(&resume(), DescriptorEncoding::Verbatim);
        let json: serde_json::Value = serde_json::from_str(&decode(&uri)).unwrap();
        assert_eq!(json["name"], "Resume");
        assert_eq!(json["external_url"], "https://x/resume.pdf");
        assert_eq!(json["image"], "https://x/img.jpg");
        assert_eq!(json["attributes"][0]["trait_type"], "Timestamp");
        assert_eq!(json["attributes"][0]["value"], 1_700_000_000u64);
    }

    #[test]
    fn quote_in_field_breaks_verbatim_document() {
        let mut record = resume();
        record.description = r#"Senior "staff" engineer \ lead"#.to_string();

        let document = render_document(&record, DescriptorEncoding::Verbatim);
        assert!(document.contains(r#""description":"Senior "staff" engineer \ lead","#));
        assert!(serde_json::from_str::<serde_json::Value>(&document).is_err());
    }

    #[test]
    fn injected_keys_land_in_verbatim_document() {
        let mut record = resume();
        record.description = r#"x","image":"https://evil/img.png"#.to_string();

        let document = render_document(&record, DescriptorEncoding::Verbatim);
        assert!(document.starts_with(
            r#"{"name":"Resume","description":"x","image":"https://evil/img.png","external_url""#
        ));
    }

    #[test]
    fn escaped_mode_keeps_hostile_text_inside_its_field() {
        let mut record = resume();
        record.description = r#"x","image":"https://evil/img.png"#.to_string();
        record.file_ref = "line\nbreak\\path".to_string();

        let document = decode(&resolve(&record, DescriptorEncoding::Escaped));
        let json: serde_json::Value = serde_json::from_str(&document).unwrap();
        assert_eq!(json["description"], record.description.as_str());
        assert_eq!(json["external_url"], record.file_ref.as_str());
        assert_eq!(json["image"], "https://x/img.jpg");
    }

    proptest! {
        #[test]
        fn modes_agree_on_benign_text(
            label in "[^\"\\\\\\p{Cc}]{0,24}",
            description in "[^\"\\\\\\p{Cc}]{0,64}",
            file_ref in "[^\"\\\\\\p{Cc}]{0,64}",
            image_ref in "[^\"\\\\\\p{Cc}]{0,64}",
            last_modified in any::<u64>(),
        ) {
            let record = Record {
                last_modified,
                label: Label::new(&label),
                description,
                file_ref,
                image_ref,
            };
            prop_assert_eq!(
                resolve(&record, DescriptorEncoding::Verbatim),
                resolve(&record, DescriptorEncoding::Escaped)
            );
        }

        #[test]
        fn rendering_is_deterministic(description in ".{0,64}", last_modified in any::<u64>()) {
            let mut record = resume();
            record.description = description;
            record.last_modified = last_modified;
            for encoding in [DescriptorEncoding::Verbatim, DescriptorEncoding::Escaped] {
                prop_assert_eq!(resolve(&record, encoding), resolve(&record, encoding));
            }
        }
    }
}
