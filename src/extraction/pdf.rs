use super::ExtractionError;

/// PDF text extractor using the pdf-extract crate.
/// Handles digital PDFs with embedded text layers; scanned PDFs come back
/// (mostly) empty and fall through to the zero-result message downstream.
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Pull the text layer of every page in order, joined with newlines.
    pub fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
        let page_texts = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

        Ok(page_texts.join("\n"))
    }

    pub fn page_count(&self, pdf_bytes: &[u8]) -> Result<usize, ExtractionError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;
        Ok(pages.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generate a valid PDF with one page per text block using lopdf.
    fn make_test_pdf(page_texts: &[&str]) -> Vec<u8> {
        use lopdf::dictionary;
        use lopdf::{Document, Object, Stream};

        let mut doc = Document::with_version("1.4");

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });

        let mut kids: Vec<Object> = Vec::new();
        let mut page_ids = Vec::new();

        for text in page_texts {
            let content = format!("BT /F1 12 Tf 100 700 Td ({text}) Tj ET");
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Contents" => content_id,
                "Resources" => dictionary! {
                    "Font" => dictionary! { "F1" => font_id },
                },
            });
            kids.push(page_id.into());
            page_ids.push(page_id);
        }

        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_texts.len() as i64,
        });

        for page_id in page_ids {
            if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(page_id) {
                dict.set("Parent", pages_id);
            }
        }

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn extracts_text_layer() {
        let pdf_bytes = make_test_pdf(&["Cholesterol 177"]);
        let text = PdfTextExtractor.extract_text(&pdf_bytes).unwrap();
        assert!(
            text.contains("Cholesterol") || text.contains("177"),
            "expected lab text, got: {text}"
        );
    }

    #[test]
    fn pages_joined_in_order() {
        let pdf_bytes = make_test_pdf(&["First page values", "Second page values"]);
        let text = PdfTextExtractor.extract_text(&pdf_bytes).unwrap();
        let first = text.find("First");
        let second = text.find("Second");
        assert!(first.is_some() && second.is_some());
        assert!(first < second, "pages must concatenate in order");
    }

    #[test]
    fn page_count_matches() {
        let pdf_bytes = make_test_pdf(&["one", "two", "three"]);
        assert_eq!(PdfTextExtractor.page_count(&pdf_bytes).unwrap(), 3);
    }

    #[test]
    fn invalid_pdf_returns_error() {
        let result = PdfTextExtractor.extract_text(b"not a pdf");
        assert!(matches!(result, Err(ExtractionError::PdfParsing(_))));
    }
}
