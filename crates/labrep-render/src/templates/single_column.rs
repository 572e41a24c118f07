use labrep_model::{Report, TemplateKind};

use crate::layout::{INK, Layout, ROW_RULE, ReportTemplate, centered_x, column_edges};
use crate::text::TextMeasure;

pub const WIDTH: u32 = 1000;
pub const HEIGHT: u32 = 1800;
pub const MARGIN: i32 = 50;
pub const ROW_PITCH: i32 = 50;

const TITLE: &str = "血 常 规 检 验 报 告 单";
const TITLE_SIZE: f32 = 50.0;
const HEADER_SIZE: f32 = 28.0;
const TEXT_SIZE: f32 = 26.0;
const SMALL_SIZE: f32 = 22.0;

const TITLE_Y: i32 = 40;
const INFO_Y: i32 = 120;
const INFO_PITCH: i32 = 30;
const TIME_X: i32 = WIDTH as i32 - 400;
pub const HEADER_Y: i32 = 320;

pub const HEADERS: [&str; 6] = ["序号", "项目名称", "结果", "单位", "参考值", "提示"];
pub const COLUMN_WIDTHS: [i32; 6] = [70, 280, 160, 120, 220, 120];
const CELL_PAD: i32 = 5;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const EXAMINER: &str = "检验者: 李技师";
const REVIEWER: &str = "审核者: 曹大夫";
const DISCLAIMER: &str = "本报告仅对本次送检标本负责";

/// Portrait report with one table and a marker column.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleColumnTemplate;

impl ReportTemplate for SingleColumnTemplate {
    fn kind(&self) -> TemplateKind {
        TemplateKind::SingleColumn
    }

    fn canvas_size(&self) -> (u32, u32) {
        (WIDTH, HEIGHT)
    }

    fn layout(&self, report: &Report<'_>, measure: &mut dyn TextMeasure) -> Layout {
        let mut layout = Layout::new(WIDTH, HEIGHT);
        let patient = &report.patient;

        let title_x = centered_x(measure, TITLE, TITLE_SIZE, WIDTH);
        layout.text((title_x, TITLE_Y), TITLE_SIZE, TITLE);

        let info = [
            format!("姓名: {}", patient.name),
            format!("性别: {}", patient.gender),
            format!("年龄: {}", patient.age),
            format!("病员号: {}", patient.patient_number),
            format!("科室: {}", patient.department),
            format!("标本: {}", patient.specimen_type),
        ];
        let mut y = INFO_Y;
        for line in info {
            layout.text((MARGIN, y), SMALL_SIZE, line);
            y += INFO_PITCH;
        }
        layout.text(
            (TIME_X, INFO_Y),
            SMALL_SIZE,
            format!("送检时间: {}", patient.collected_at.format(TIME_FORMAT)),
        );
        layout.text(
            (TIME_X, INFO_Y + 40),
            SMALL_SIZE,
            format!("报告时间: {}", patient.reported_at.format(TIME_FORMAT)),
        );

        let edges = column_edges(MARGIN, &COLUMN_WIDTHS);
        let table_right = edges[edges.len() - 1];
        for (header, x) in HEADERS.iter().zip(&edges) {
            layout.text((x + CELL_PAD, HEADER_Y), HEADER_SIZE, *header);
        }
        layout.rule((MARGIN, table_right), HEADER_Y + 40, 2, INK);

        let mut y = HEADER_Y + 60;
        for row in report.rows() {
            let cells = [
                row.item.seq.to_string(),
                row.item.name.clone(),
                row.formatted_value(),
                row.item.unit.clone(),
                row.reference_text.clone(),
                row.status.marker().unwrap_or_default().to_string(),
            ];
            for (cell, x) in cells.into_iter().zip(&edges) {
                layout.text((x + CELL_PAD, y), TEXT_SIZE, cell);
            }
            y += ROW_PITCH;
            layout.rule((MARGIN, table_right), y - 10, 1, ROW_RULE);
        }

        let footer_y = HEIGHT as i32 - 120;
        layout.text((MARGIN, footer_y), SMALL_SIZE, EXAMINER);
        layout.text((MARGIN + 300, footer_y), SMALL_SIZE, REVIEWER);
        layout.text((MARGIN, HEIGHT as i32 - 80), SMALL_SIZE, DISCLAIMER);

        layout
    }
}
