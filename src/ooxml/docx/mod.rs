/// Word (.docx) document writing.
///
/// The module is organized around these key types:
/// - `MutableDocument`: body content, page setup, defaults and properties
/// - `MutableParagraph` / `MutableRun`: text with paragraph and character formatting
/// - `MutableTable`: rows of cells, each holding paragraphs
/// - `DocxWriter`: turns a document into an OPC package and saves it
pub mod format;
pub mod writer;

pub use format::{LineSpacing, ParagraphAlignment, RgbColor, TableAlignment, TableBorderStyle};
pub use writer::{DocxWriter, MutableDocument, MutableParagraph, MutableRun, MutableTable};
