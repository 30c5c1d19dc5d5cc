use crate::utils::formatting::truncate;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Fill colours of the stacked segments (RGB 0..1), cycled.
const SEGMENT_RGB: [(f32, f32, f32); 5] = [
    (0.30, 0.62, 0.36),
    (0.85, 0.33, 0.31),
    (0.95, 0.68, 0.24),
    (0.27, 0.51, 0.71),
    (0.58, 0.40, 0.74),
];

/// One bar of the PDF chart: label plus (segment index, value) pairs.
pub struct PdfBar {
    pub label: String,
    pub segments: Vec<(usize, usize)>,
}

/// Pages are written one by one; `save` closes the document.
pub struct PdfReport {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfReport {
    fn default() -> Self {
        Self::new()
    }
}

/// PDF base fonts only know WinAnsi: Latin-1 maps 1:1, the rest becomes `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '–' | '—' => 0x96,
            '…' => 0x85,
            '€' => 0x80,
            c if (c as u32) < 0x100 => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

impl PdfReport {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // object ids are assigned by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            // A4 landscape
            page_w: 842.0,
            page_h: 595.0,
            margin: 40.0,
            row_h: 18.0,

            next_id: 4,
            font_id,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);
        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let encoded = encode_win_ansi(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&encoded));
        content.end_text();
    }

    fn fill_rect(&self, content: &mut Content, rgb: (f32, f32, f32), x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn stroke_rect(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_title(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin,
            self.title_font_size,
            title,
        );
        self.draw_text(
            content,
            self.page_w - self.margin - 50.0,
            self.margin - 25.0,
            self.font_size,
            &format!("Page {page}"),
        );
    }

    /// Summary page: title, `lines` (KPI) and a horizontal stacked bar chart.
    pub fn write_summary(&mut self, title: &str, lines: &[String], legend: &[&str], bars: &[PdfBar]) {
        let mut content = self.new_page();
        let page = self.page_refs.len();
        self.draw_title(&mut content, title, page);

        let mut y = self.page_h - self.margin - 30.0;
        for line in lines {
            self.draw_text(&mut content, self.margin, y, self.header_font_size, line);
            y -= 16.0;
        }

        // legend
        y -= 10.0;
        let mut x = self.margin;
        for (i, name) in legend.iter().enumerate() {
            let rgb = SEGMENT_RGB[i % SEGMENT_RGB.len()];
            self.fill_rect(&mut content, rgb, x, y, 10.0, 10.0);
            self.draw_text(&mut content, x + 14.0, y + 1.0, self.font_size, name);
            x += 24.0 + name.chars().count() as f32 * 5.5;
        }
        y -= 24.0;

        let label_w = 140.0;
        let chart_w = self.page_w - 2.0 * self.margin - label_w;
        let max_total = bars
            .iter()
            .map(|b| b.segments.iter().map(|(_, v)| *v).sum::<usize>())
            .max()
            .unwrap_or(0)
            .max(1) as f32;
        let bar_h = 14.0;

        for bar in bars {
            if y - bar_h < self.margin {
                break;
            }
            self.draw_text(
                &mut content,
                self.margin,
                y + 3.0,
                self.font_size,
                &truncate(&bar.label, 26),
            );

            let mut x = self.margin + label_w;
            for (seg, value) in &bar.segments {
                if *value == 0 {
                    continue;
                }
                let w = chart_w * (*value as f32) / max_total;
                let rgb = SEGMENT_RGB[seg % SEGMENT_RGB.len()];
                self.fill_rect(&mut content, rgb, x, y, w, bar_h);
                if w > 14.0 {
                    self.draw_text(&mut content, x + 3.0, y + 3.5, self.font_size, &value.to_string());
                }
                x += w;
            }
            y -= bar_h + 6.0;
        }

        self.finalize_page(content);
    }

    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * 6.0 + 8.0)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count() as f32 * 5.2 + 8.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;
        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }
        widths
    }

    fn draw_row(&self, content: &mut Content, y: f32, widths: &[f32], row: &[String], size: f32) {
        let mut x = self.margin;
        for (text, w) in row.iter().zip(widths) {
            // Helvetica averages ~0.55 em per glyph
            let fits = ((w - 6.0) / (size * 0.55)).max(1.0) as usize;
            self.draw_text(content, x + 3.0, y + 5.0, size, &truncate(text, fits));
            self.stroke_rect(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    /// Multi-page table, header repeated on every page.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let table_w: f32 = widths.iter().sum();

        let mut remaining: &[Vec<String>] = rows;
        loop {
            let mut content = self.new_page();
            let page = self.page_refs.len();
            self.draw_title(&mut content, title, page);

            let mut y = self.page_h - self.margin - 30.0;
            self.fill_rect(&mut content, (0.85, 0.87, 0.90), self.margin, y, table_w, self.row_h);
            self.draw_row(&mut content, y, &widths, &header_row, self.header_font_size);
            y -= self.row_h;

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }
                if i % 2 == 0 {
                    self.fill_rect(&mut content, (0.96, 0.96, 0.96), self.margin, y, table_w, self.row_h);
                }
                self.draw_row(&mut content, y, &widths, row, self.font_size);
                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            if remaining.is_empty() {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
