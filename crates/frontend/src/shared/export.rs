/// PDF export through the browser `html2canvas` and `jsPDF` libraries
///
/// Both libraries are loaded from `index.html`; errors are reported as
/// `Result<_, String>` to the screen that started the export.
use contracts::shared::export::{PdfExportable, PdfTable, DEFAULT_ROWS_PER_PAGE};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlCanvasElement, HtmlElement};

/// Elements carrying this class are left out of rasterized PDFs
pub const NO_PDF_CLASS: &str = "no-pdf";

/// A4 portrait width in millimetres
const A4_WIDTH_MM: f64 = 210.0;
const A4_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 10.0;
const ROW_HEIGHT_MM: f64 = 8.0;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = html2canvas, catch)]
    fn html2canvas(element: &HtmlElement, options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[wasm_bindgen(js_namespace = jspdf)]
extern "C" {
    #[wasm_bindgen(js_name = jsPDF)]
    type JsPdf;

    #[wasm_bindgen(constructor, js_class = "jsPDF", catch)]
    fn new(orientation: &str, unit: &str, format: &str) -> Result<JsPdf, JsValue>;

    #[wasm_bindgen(method, js_class = "jsPDF", js_name = addImage)]
    fn add_image(this: &JsPdf, data: &str, format: &str, x: f64, y: f64, width: f64, height: f64);

    #[wasm_bindgen(method, js_class = "jsPDF")]
    fn text(this: &JsPdf, text: &str, x: f64, y: f64);

    #[wasm_bindgen(method, js_class = "jsPDF", js_name = setFontSize)]
    fn set_font_size(this: &JsPdf, size: f64);

    #[wasm_bindgen(method, js_class = "jsPDF")]
    fn line(this: &JsPdf, x1: f64, y1: f64, x2: f64, y2: f64);

    #[wasm_bindgen(method, js_class = "jsPDF", js_name = addPage)]
    fn add_page(this: &JsPdf);

    #[wasm_bindgen(method, js_class = "jsPDF")]
    fn save(this: &JsPdf, file_name: &str);
}

fn new_a4() -> Result<JsPdf, String> {
    JsPdf::new("p", "mm", "a4").map_err(|e| format!("jsPDF is not available: {:?}", e))
}

/// Rasterize the DOM region with id `region_id` and save it as `{file_name}.pdf`
///
/// The capture is scaled to the A4 width; its height stays proportional.
pub async fn generate_pdf(region_id: &str, file_name: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let region = document
        .get_element_by_id(region_id)
        .ok_or_else(|| format!("Element '{}' not found", region_id))?
        .dyn_into::<HtmlElement>()
        .map_err(|e| format!("Failed to cast to HtmlElement: {:?}", e))?;

    let ignore = Closure::<dyn Fn(Element) -> bool>::new(|el: Element| {
        el.class_name().split_whitespace().any(|c| c == NO_PDF_CLASS)
    });
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"scale".into(), &JsValue::from_f64(2.0))
        .map_err(|e| format!("Failed to set options: {:?}", e))?;
    js_sys::Reflect::set(&options, &"ignoreElements".into(), ignore.as_ref())
        .map_err(|e| format!("Failed to set options: {:?}", e))?;

    let promise = html2canvas(&region, &options)
        .map_err(|e| format!("html2canvas is not available: {:?}", e))?;
    let canvas = JsFuture::from(promise)
        .await
        .map_err(|e| format!("Failed to capture '{}': {:?}", region_id, e))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|e| format!("Failed to cast to canvas: {:?}", e))?;
    drop(ignore);

    if canvas.width() == 0 {
        return Err("Nothing to export".to_string());
    }
    let image = canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| format!("Failed to encode image: {:?}", e))?;
    let height = canvas.height() as f64 * A4_WIDTH_MM / canvas.width() as f64;

    let pdf = new_a4()?;
    pdf.add_image(&image, "PNG", 0.0, 0.0, A4_WIDTH_MM, height);
    pdf.save(&format!("{}.pdf", file_name));
    log::info!("pdf: saved {}.pdf", file_name);
    Ok(())
}

/// Write `data` as a paginated text table and save it as `{file_name}.pdf`
pub fn download_table_pdf<T: PdfExportable>(
    title: &str,
    data: &[T],
    file_name: &str,
) -> Result<(), String> {
    let table = PdfTable::build(title, data)?;
    let pdf = new_a4()?;
    let columns = table.headers.len().max(1) as f64;
    let column_width = (A4_WIDTH_MM - 2.0 * MARGIN_MM) / columns;

    for (index, page) in table.pages(DEFAULT_ROWS_PER_PAGE).iter().enumerate() {
        if index > 0 {
            pdf.add_page();
        }
        let mut y = MARGIN_MM + 6.0;
        pdf.set_font_size(16.0);
        pdf.text(&table.title, MARGIN_MM, y);
        y += ROW_HEIGHT_MM * 1.5;

        pdf.set_font_size(10.0);
        write_row(&pdf, &table.headers, y, column_width);
        pdf.line(MARGIN_MM, y + 2.0, A4_WIDTH_MM - MARGIN_MM, y + 2.0);

        pdf.set_font_size(9.0);
        for row in page.iter() {
            y += ROW_HEIGHT_MM;
            if y > A4_HEIGHT_MM - MARGIN_MM {
                break;
            }
            write_row(&pdf, row, y, column_width);
        }
    }

    pdf.save(&format!("{}.pdf", file_name));
    log::info!("pdf: saved {}.pdf ({} rows)", file_name, table.rows.len());
    Ok(())
}

fn write_row(pdf: &JsPdf, cells: &[String], y: f64, column_width: f64) {
    for (column, cell) in cells.iter().enumerate() {
        pdf.text(cell, MARGIN_MM + column as f64 * column_width, y);
    }
}

/// Open the browser print dialog
pub fn print_page() -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    window
        .print()
        .map_err(|e| format!("Failed to print: {:?}", e))
}
