use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::error::Error;
use crate::fonts::{Font, FontEntry, register_font, to_winansi_bytes};
use crate::symbol::SymbolImage;

/// Drawing primitives the layout engine needs. Coordinates are PDF points
/// with the origin at the bottom-left of the page.
pub trait Canvas {
    type Output;

    /// Draw `image` stretched over the rectangle whose bottom-left corner is `(x, y)`.
    fn draw_image(&mut self, image: &SymbolImage, x: f32, y: f32, width: f32, height: f32);

    /// Draw `text` with its baseline at `y`. When `centered`, `x` is the
    /// horizontal center of the text, otherwise its left edge.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: Font, font_size: f32, centered: bool);

    fn new_page(&mut self);

    /// Seal the document. Consumes the canvas so it can only happen once.
    fn finish(self) -> Result<Self::Output, Error>;
}

/// A `Canvas` that writes a PDF with pdf-writer.
pub struct PdfCanvas {
    pdf: Pdf,
    next_id: i32,
    catalog_id: Ref,
    pages_id: Ref,
    page_width: f32,
    page_height: f32,
    fonts: Vec<FontEntry>,
    title: Option<String>,
    finished_pages: Vec<(Content, Vec<(String, Ref)>)>,
    current: Content,
    current_images: Vec<(String, Ref)>,
    image_count: usize,
}

impl PdfCanvas {
    pub fn new(page_width: f32, page_height: f32) -> Self {
        // Catalog and page tree come first; everything else is allocated on demand.
        let mut canvas = PdfCanvas {
            pdf: Pdf::new(),
            next_id: 3,
            catalog_id: Ref::new(1),
            pages_id: Ref::new(2),
            page_width,
            page_height,
            fonts: Vec::new(),
            title: None,
            finished_pages: Vec::new(),
            current: Content::new(),
            current_images: Vec::new(),
            image_count: 0,
        };
        for font in [Font::Regular, Font::Bold] {
            let font_ref = canvas.alloc();
            let entry = register_font(&mut canvas.pdf, font, font_ref);
            canvas.fonts.push(entry);
        }
        canvas
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_id);
        self.next_id += 1;
        r
    }

    fn embed_image(&mut self, image: &SymbolImage) -> String {
        let xobj_ref = self.alloc();
        self.image_count += 1;
        let pdf_name = format!("Im{}", self.image_count);

        let gray = image.pixels();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(gray.as_raw(), 6);
        let mut xobj = self.pdf.image_xobject(xobj_ref, &compressed);
        xobj.filter(Filter::FlateDecode);
        xobj.width(gray.width() as i32);
        xobj.height(gray.height() as i32);
        xobj.color_space().device_gray();
        xobj.bits_per_component(8);

        self.current_images.push((pdf_name.clone(), xobj_ref));
        pdf_name
    }
}

impl Canvas for PdfCanvas {
    type Output = Vec<u8>;

    fn draw_image(&mut self, image: &SymbolImage, x: f32, y: f32, width: f32, height: f32) {
        let pdf_name = self.embed_image(image);
        self.current.save_state();
        self.current.transform([width, 0.0, 0.0, height, x, y]);
        self.current.x_object(Name(pdf_name.as_bytes()));
        self.current.restore_state();
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: Font, font_size: f32, centered: bool) {
        let start_x = if centered {
            x - font.text_width(text, font_size) / 2.0
        } else {
            x
        };
        let bytes = to_winansi_bytes(text);
        self.current
            .begin_text()
            .set_font(Name(font.pdf_name().as_bytes()), font_size)
            .next_line(start_x, y)
            .show(Str(&bytes))
            .end_text();
    }

    fn new_page(&mut self) {
        let content = std::mem::replace(&mut self.current, Content::new());
        let images = std::mem::take(&mut self.current_images);
        self.finished_pages.push((content, images));
    }

    fn finish(mut self) -> Result<Vec<u8>, Error> {
        self.new_page();
        let pages = std::mem::take(&mut self.finished_pages);

        let n = pages.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| self.alloc()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| self.alloc()).collect();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        let font_pairs: Vec<(&str, Ref)> = self
            .fonts
            .iter()
            .map(|entry| (entry.font.pdf_name(), entry.font_ref))
            .collect();

        for (i, (content, images)) in pages.into_iter().enumerate() {
            let raw = content.finish();
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
            self.pdf
                .stream(content_ids[i], &compressed)
                .filter(Filter::FlateDecode);

            let mut page = self.pdf.page(page_ids[i]);
            page.media_box(Rect::new(0.0, 0.0, self.page_width, self.page_height))
                .parent(self.pages_id)
                .contents(content_ids[i]);
            let mut resources = page.resources();
            {
                let mut fonts = resources.fonts();
                for (name, font_ref) in &font_pairs {
                    fonts.pair(Name(name.as_bytes()), *font_ref);
                }
            }
            if !images.is_empty() {
                let mut xobjects = resources.x_objects();
                for (name, xobj_ref) in &images {
                    xobjects.pair(Name(name.as_bytes()), *xobj_ref);
                }
            }
        }

        let info_id = self.alloc();
        let mut info = self.pdf.document_info(info_id);
        info.producer(TextStr(concat!("barsheet ", env!("CARGO_PKG_VERSION"))));
        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        drop(info);

        log::debug!("PDF assembled: {n} pages, {} images", self.image_count);
        Ok(self.pdf.finish())
    }
}
