use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use crate::error::PreconError;
use crate::mortgage::MortgageOutput;
use crate::payment_plan::PaymentPlanOutput;
use crate::types::{format_money, format_percent};
use crate::PreconResult;

// US Letter, origin at the bottom-left corner
const PAGE_WIDTH: Mm = Mm(215.9);
const PAGE_HEIGHT: Mm = Mm(279.4);
const MARGIN: Mm = Mm(20.0);
const ROW_HEIGHT: Mm = Mm(8.0);
const COL_WIDTHS: [Mm; 3] = [Mm(62.0), Mm(52.0), Mm(62.0)];

/// Render the investment analysis report as an in-memory PDF.
///
/// Always contains the "Construction Payment Plan" table; the
/// "Bank Financing Estimate" table is added when mortgage data is supplied.
/// Blocking, single-page, no streaming: the full byte buffer is returned.
pub fn render_report(
    plan: &PaymentPlanOutput,
    mortgage: Option<&MortgageOutput>,
) -> PreconResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Real Estate Investment Analysis",
        PAGE_WIDTH,
        PAGE_HEIGHT,
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| PreconError::ReportError(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| PreconError::ReportError(e.to_string()))?;
    let italic = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(|e| PreconError::ReportError(e.to_string()))?;

    layer.set_outline_color(Color::Rgb(Rgb::new(0.2, 0.2, 0.2, None)));
    layer.set_outline_thickness(0.75);

    let summary = &plan.summary;
    let mut cursor = Mm(255.0);

    // --- Title and price line ---
    layer.use_text(
        "Real Estate Investment Analysis",
        18.0,
        MARGIN,
        cursor,
        &bold,
    );
    cursor = cursor - Mm(10.0);
    layer.use_text(
        format!("Property Price: {}", format_money(summary.property_price)),
        11.0,
        MARGIN,
        cursor,
        &regular,
    );
    cursor = cursor - Mm(14.0);

    // --- Phase 1: construction payment plan ---
    layer.use_text("Construction Payment Plan", 13.0, MARGIN, cursor, &bold);
    cursor = cursor - Mm(6.0);

    let plan_rows = [
        [
            "Separation".to_string(),
            format_money(summary.separation_paid),
            "Paid".to_string(),
        ],
        [
            "Contract Signing".to_string(),
            format_money(summary.due_at_signing),
            format!("Completes {}", format_percent(plan.percentages.initial_target)),
        ],
        [
            "Monthly Installments".to_string(),
            format_money(summary.monthly_payment),
            format!("For {} months", summary.number_of_months),
        ],
        [
            "Amount to Finance".to_string(),
            format_money(summary.final_payment),
            "Due on delivery".to_string(),
        ],
    ];
    cursor = draw_table(
        &layer,
        &regular,
        &bold,
        cursor,
        ["Item", "Amount", "Note"],
        &plan_rows,
        false,
    );

    // --- Phase 2: bank financing estimate ---
    if let Some(estimate) = mortgage {
        cursor = cursor - Mm(14.0);
        layer.use_text("Bank Financing Estimate", 13.0, MARGIN, cursor, &bold);
        cursor = cursor - Mm(6.0);

        let bank_rows = [
            [
                "Loan Amount".to_string(),
                format_money(estimate.loan_amount),
                format!("Over {} years", estimate.years),
            ],
            [
                "Interest Rate".to_string(),
                format_percent(estimate.annual_interest_rate),
                "Estimated annual".to_string(),
            ],
            [
                "Principal + Interest".to_string(),
                format_money(estimate.monthly_principal_interest),
                "Excluding insurance".to_string(),
            ],
            [
                "Insurance (Life/Fire)".to_string(),
                format_money(estimate.monthly_insurance),
                "Estimated monthly".to_string(),
            ],
            [
                "Total Monthly Payment".to_string(),
                format_money(estimate.monthly_total),
                "Monthly bank payment".to_string(),
            ],
        ];
        draw_table(
            &layer,
            &regular,
            &bold,
            cursor,
            ["Item", "Value", "Detail"],
            &bank_rows,
            true,
        );
    }

    // --- Footer ---
    layer.use_text(
        "Note: insurance values and bank rates are estimates and may vary.",
        9.0,
        MARGIN,
        Mm(28.0),
        &italic,
    );
    layer.use_text(
        format!("Generated on {}", chrono::Local::now().format("%Y-%m-%d")),
        9.0,
        MARGIN,
        Mm(22.0),
        &regular,
    );

    doc.save_to_bytes()
        .map_err(|e| PreconError::ReportError(e.to_string()))
}

/// Draw a three-column grid table with a bold header row, starting with its
/// top edge at `top`. Returns the y position of the bottom edge.
fn draw_table(
    layer: &PdfLayerReference,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
    top: Mm,
    header: [&str; 3],
    rows: &[[String; 3]],
    bold_last_row: bool,
) -> Mm {
    let table_width = COL_WIDTHS[0] + COL_WIDTHS[1] + COL_WIDTHS[2];
    let right = MARGIN + table_width;
    let row_count = rows.len() + 1;

    // Horizontal rules
    let mut y = top;
    hline(layer, MARGIN, right, y);
    for _ in 0..row_count {
        y = y - ROW_HEIGHT;
        hline(layer, MARGIN, right, y);
    }
    let bottom = y;

    // Vertical rules
    let mut x = MARGIN;
    vline(layer, x, bottom, top);
    for width in COL_WIDTHS {
        x = x + width;
        vline(layer, x, bottom, top);
    }

    // Header row
    let mut baseline = top - ROW_HEIGHT + Mm(2.5);
    draw_row(layer, bold, baseline, header.map(|s| s.to_string()));

    // Data rows
    for (i, row) in rows.iter().enumerate() {
        baseline = baseline - ROW_HEIGHT;
        let font = if bold_last_row && i == rows.len() - 1 {
            bold
        } else {
            regular
        };
        draw_row(layer, font, baseline, row.clone());
    }

    bottom
}

fn draw_row(layer: &PdfLayerReference, font: &IndirectFontRef, baseline: Mm, cells: [String; 3]) {
    let mut x = MARGIN;
    for (cell, width) in cells.into_iter().zip(COL_WIDTHS) {
        layer.use_text(cell, 10.0, x + Mm(2.0), baseline, font);
        x = x + width;
    }
}

fn hline(layer: &PdfLayerReference, x1: Mm, x2: Mm, y: Mm) {
    layer.add_line(Line {
        points: vec![
            (Point::new(x1, y), false),
            (Point::new(x2, y), false),
        ],
        is_closed: false,
    });
}

fn vline(layer: &PdfLayerReference, x: Mm, y1: Mm, y2: Mm) {
    layer.add_line(Line {
        points: vec![
            (Point::new(x, y1), false),
            (Point::new(x, y2), false),
        ],
        is_closed: false,
    });
}
