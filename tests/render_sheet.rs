use barcode_sheet::config::PageSize;
use rxing::common::BitArray;
use rxing::oned::{Code128Reader, OneDReader};
use rxing::DecodeHints;
use barcode_sheet::{
    render_sheet, Catalogue, CatalogueEntry, CellBounds, CellOutcome, Error, GridLayout,
    RenderedSheet, SheetConfig, SymbolError,
};

fn scanline(sheet: &RenderedSheet, bounds: &CellBounds, y: u32) -> Vec<u8> {
    let img = sheet.canvas().image();
    let x0 = bounds.x.round() as u32 + 1;
    let x1 = bounds.right().round() as u32;
    (x0..x1).map(|x| img.get_pixel(x, y).0[0]).collect()
}

fn read_code_128(pixels: &[u8]) -> Option<String> {
    let mut row = BitArray::with_size(pixels.len());
    for (i, &luma) in pixels.iter().enumerate() {
        if luma < 128 {
            row.set(i);
        }
    }
    Code128Reader::default()
        .decode_row(0, &row, &DecodeHints::default())
        .ok()
        .map(|result| result.getText().to_string())
}

fn interior_is_blank(sheet: &RenderedSheet, bounds: &CellBounds) -> bool {
    let img = sheet.canvas().image();
    let (x0, x1) = (bounds.x.round() as u32 + 1, bounds.right().round() as u32);
    let (y0, y1) = (bounds.y.round() as u32 + 1, bounds.bottom().round() as u32);
    (y0..y1).all(|y| (x0..x1).all(|x| img.get_pixel(x, y).0[0] == 255))
}

fn layout_for(sheet: &RenderedSheet, entries: usize) -> GridLayout {
    let g = sheet.geometry();
    GridLayout::new(entries, g.width_px, g.height_px, g.margin_px, g.columns).unwrap()
}

#[test]
fn every_vim_barcode_scans_back_to_its_code() {
    let catalogue = Catalogue::vim();
    let config = SheetConfig::default();
    let sheet = render_sheet(&catalogue, config.clone()).unwrap();

    assert_eq!(sheet.outcomes().len(), catalogue.len());
    assert!(sheet.outcomes().iter().all(CellOutcome::is_rendered));
    assert_eq!((sheet.canvas().width(), sheet.canvas().height()), (2481, 3507));
    assert_eq!(sheet.geometry().rows, 27);

    let grid = layout_for(&sheet, catalogue.len());
    let bar_h = (grid.cell_height() * config.barcode.height_ratio) as u32;
    for (i, entry) in catalogue.iter().enumerate() {
        let bounds = grid.cell_bounds(i).unwrap();
        let y = (bounds.y + config.cell.top_padding) as u32 + bar_h / 2;
        assert_eq!(
            read_code_128(&scanline(&sheet, &bounds, y)).as_deref(),
            Some(entry.code.as_str()),
            "entry {i}"
        );
    }
}

#[test]
fn first_entry_cell_starts_at_the_margin() {
    let catalogue = Catalogue::new(vec![
        CatalogueEntry::new(":wq", ":wq", "Write & quit"),
        CatalogueEntry::new(":q", ":q", "Quit"),
    ]);
    let (w, h) = PageSize::A4.to_px();
    let grid = GridLayout::new(catalogue.len(), w, h, 80.0, 4).unwrap();

    let b = grid.cell_bounds(0).unwrap();
    assert_eq!(b, CellBounds { x: 80.0, y: 80.0, width: grid.cell_width(), height: grid.cell_height() });
    assert_eq!(grid.cell_width(), (2481.0 - 160.0) / 4.0);
    assert_eq!(grid.cell_height(), 3507.0 - 160.0);
}

#[test]
fn unencodable_entry_leaves_a_blank_cell_and_rendering_continues() {
    let catalogue = Catalogue::new(vec![
        CatalogueEntry::new(":w", ":w", "Write current file"),
        CatalogueEntry::new(":w\u{1b}q", ":wq", "Escape in the middle"),
        CatalogueEntry::new(":q", ":q", "Quit"),
    ]);
    let config = SheetConfig { title: None, ..SheetConfig::default() };
    let sheet = render_sheet(&catalogue, config).unwrap();

    assert_eq!(
        sheet.outcomes()[1],
        CellOutcome::Skipped(SymbolError::Encoding { code: ":w\u{1b}q".into(), ch: '\u{1b}', position: 2 })
    );
    assert!(sheet.outcomes()[0].is_rendered());
    assert!(sheet.outcomes()[2].is_rendered());

    let grid = layout_for(&sheet, catalogue.len());
    assert!(interior_is_blank(&sheet, &grid.cell_bounds(1).unwrap()));
    assert!(!interior_is_blank(&sheet, &grid.cell_bounds(0).unwrap()));
    assert!(!interior_is_blank(&sheet, &grid.cell_bounds(2).unwrap()));

    // the skipped cell still gets its outline
    let b = grid.cell_bounds(1).unwrap();
    let img = sheet.canvas().image();
    assert_eq!(img.get_pixel(b.center_x() as u32, b.y.round() as u32).0[0], 230);
}

#[test]
fn empty_catalogue_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sheet.png");

    let result = render_sheet(&Catalogue::default(), SheetConfig::default()).and_then(|s| s.save(&out));

    assert!(matches!(result, Err(Error::Configuration(_))));
    assert!(!out.exists());
}

#[test]
fn saved_png_has_page_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sheet.png");
    let catalogue: Catalogue = Catalogue::vim().iter().take(8).cloned().collect();

    render_sheet(&catalogue, SheetConfig::default()).unwrap().save(&out).unwrap();

    let img = image::open(&out).unwrap().to_luma8();
    assert_eq!(img.dimensions(), (2481, 3507));
    assert_eq!(img.get_pixel(0, 0).0[0], 255);
}

#[test]
fn saving_into_a_missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("sheet.png");
    let catalogue: Catalogue = Catalogue::vim().iter().take(1).cloned().collect();

    let err = render_sheet(&catalogue, SheetConfig::default()).unwrap().save(&out).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn rendering_is_byte_for_byte_repeatable() {
    let catalogue: Catalogue = Catalogue::vim().iter().take(12).cloned().collect();
    let config = SheetConfig { page: PageSize { dpi: 100, ..PageSize::A4 }, ..SheetConfig::default() };

    let a = render_sheet(&catalogue, config.clone()).unwrap();
    let b = render_sheet(&catalogue, config).unwrap();

    assert_eq!(a.canvas().image().as_raw(), b.canvas().image().as_raw());
}
