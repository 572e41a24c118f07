use labrep_model::{REPORT_TIME_FORMAT, Report, ResultRow, TemplateKind};

use crate::layout::{INK, Layout, ReportTemplate, centered_x, column_edges};
use crate::text::TextMeasure;

pub const WIDTH: u32 = 2480;
pub const HEIGHT: u32 = 1748;
pub const MARGIN: i32 = 80;
pub const ROW_PITCH: i32 = 42;
pub const LINE_PITCH: i32 = 45;

const TITLE: &str = "知己知医血常规报告单";
const TITLE_SIZE: f32 = 48.0;
const HEADER_SIZE: f32 = 32.0;
const NORMAL_SIZE: f32 = 28.0;
const TABLE_SIZE: f32 = 26.0;

pub const HEADERS: [&str; 5] = ["序号代码", "项目名称", "结果", "单位", "参考值"];
pub const COLUMN_WIDTHS: [i32; 5] = [160, 250, 120, 120, 140];
pub const LEFT_TABLE_X: i32 = MARGIN;
pub const RIGHT_TABLE_X: i32 = WIDTH as i32 / 2 - 60;
/// Right-edge inset of the marker inside the result column.
pub const MARKER_INSET: i32 = 30;
/// Leftward nudge applied to the centered result text.
const RESULT_NUDGE: i32 = 20;
const CELL_PAD: i32 = 10;

/// A4 landscape report with two tables side by side.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoColumnTemplate;

impl ReportTemplate for TwoColumnTemplate {
    fn kind(&self) -> TemplateKind {
        TemplateKind::TwoColumn
    }

    fn canvas_size(&self) -> (u32, u32) {
        (WIDTH, HEIGHT)
    }

    fn layout(&self, report: &Report<'_>, measure: &mut dyn TextMeasure) -> Layout {
        let mut layout = Layout::new(WIDTH, HEIGHT);
        let patient = &report.patient;
        let mut y = MARGIN;

        let title_x = centered_x(measure, TITLE, TITLE_SIZE, WIDTH);
        layout.text((title_x, y), TITLE_SIZE, TITLE);
        y += measure.line_height(TITLE_SIZE).round() as i32 + 60;

        let info_column_width = (WIDTH as i32 - 3 * MARGIN) / 2;
        let left_x = MARGIN;
        let right_x = MARGIN + info_column_width + 50;
        let left_info = [
            format!("姓    名：{}", patient.name),
            format!("病    案：{}", patient.case_number),
            format!("费    别：{}", patient.fee_category),
            format!("标本编号：{}", patient.specimen_number),
            format!("性    别：{}", patient.gender),
            format!("申请科室：{}", patient.department),
            format!("送检医师：{}", patient.physician),
        ];
        let right_info = [
            format!("条码编号：{}", patient.barcode),
            format!("年    龄：{}", patient.age),
            format!("床    号：{}", patient.bed),
            format!("标本种类：{}", patient.specimen_type),
            format!("临床诊断：{}", patient.diagnosis),
        ];
        for (i, line) in left_info.iter().enumerate() {
            layout.text((left_x, y + i as i32 * LINE_PITCH), NORMAL_SIZE, line.as_str());
        }
        for (i, line) in right_info.iter().enumerate() {
            layout.text((right_x, y + i as i32 * LINE_PITCH), NORMAL_SIZE, line.as_str());
        }
        y += left_info.len().max(right_info.len()) as i32 * LINE_PITCH + 80;

        for table_x in [LEFT_TABLE_X, RIGHT_TABLE_X] {
            for (header, x) in HEADERS.iter().zip(column_edges(table_x, &COLUMN_WIDTHS)) {
                layout.text((x, y), HEADER_SIZE, *header);
            }
        }
        y += 60;
        layout.rule((MARGIN, WIDTH as i32 - MARGIN), y, 2, INK);
        y += 40;

        let empty = Vec::new();
        let left = report.panels.first().unwrap_or(&empty);
        let right = report.panels.get(1).unwrap_or(&empty);
        let lines = left.len().max(right.len());
        for i in 0..lines {
            let row_y = y + i as i32 * ROW_PITCH;
            if let Some(row) = left.get(i) {
                table_row(&mut layout, measure, row, LEFT_TABLE_X, row_y);
            }
            if let Some(row) = right.get(i) {
                table_row(&mut layout, measure, row, RIGHT_TABLE_X, row_y);
            }
        }
        y += (lines as i32 + 2) * ROW_PITCH + 60;

        let footer = [
            format!(
                "修改时间：{}",
                patient.modified_at.format(REPORT_TIME_FORMAT)
            ),
            format!(
                "报告时间：{}",
                patient.reported_at.format(REPORT_TIME_FORMAT)
            ),
            format!("检验者：{}", patient.examiner),
            format!("审核者：{}", patient.reviewer),
            String::new(),
            "备注：".to_string(),
            "此结果仅对本样本负责！".to_string(),
        ];
        for (i, line) in footer.into_iter().enumerate() {
            layout.text((MARGIN, y + i as i32 * LINE_PITCH), NORMAL_SIZE, line);
        }

        layout
    }
}

/// One table row; the marker sits between the result and unit columns.
fn table_row(
    layout: &mut Layout,
    measure: &mut dyn TextMeasure,
    row: &ResultRow<'_>,
    start_x: i32,
    y: i32,
) {
    let edges = column_edges(start_x, &COLUMN_WIDTHS);
    let result_width = COLUMN_WIDTHS[2];

    layout.text((edges[0] + CELL_PAD, y), TABLE_SIZE, row.item.seq_label());
    layout.text((edges[1] + CELL_PAD, y), TABLE_SIZE, row.item.name.as_str());

    let value = row.formatted_value();
    let value_width = measure.text_width(&value, TABLE_SIZE).round() as i32;
    let value_x = edges[2] + (result_width - value_width).div_euclid(2) - RESULT_NUDGE;
    layout.text((value_x, y), TABLE_SIZE, value);

    if let Some(marker) = row.status.marker() {
        layout.text((edges[2] + result_width - MARKER_INSET, y), TABLE_SIZE, marker);
    }

    layout.text((edges[3] + CELL_PAD, y), TABLE_SIZE, row.item.unit.as_str());
    layout.text(
        (edges[4] + CELL_PAD, y),
        TABLE_SIZE,
        row.reference_text.as_str(),
    );
}
