//! Layout and rasterization tests using the built-in font.
//!
//! The built-in font has fixed advances (6px narrow, 11px wide, 11px line
//! height), which keeps every computed position exact.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use labrep_model::{Gender, PatientInfo, Report, ResultRow, TemplateKind, TestItem};
use labrep_render::templates::{single_column, two_column};
use labrep_render::{DrawOp, Layout, ReportRenderer, Typeface};
use labrep_synth::{Catalog, SamplingStrategy, resolve, sample_panels, selected_segment};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn report_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn patient() -> PatientInfo {
    PatientInfo {
        name: "张三".to_string(),
        gender: Gender::Male,
        age: 42,
        patient_number: "12345".to_string(),
        case_number: "BA123456".to_string(),
        fee_category: "医保".to_string(),
        specimen_number: "31".to_string(),
        department: "内科".to_string(),
        physician: "王伟".to_string(),
        barcode: "TM654321".to_string(),
        bed: "12-3".to_string(),
        specimen_type: "全血".to_string(),
        diagnosis: "健康体检".to_string(),
        collected_at: report_time(),
        reported_at: report_time(),
        modified_at: report_time() - chrono::Duration::hours(3),
        examiner: "李娜".to_string(),
        reviewer: "刘洋".to_string(),
    }
}

/// Rows with explicit values, classified against each item's male range.
fn rows_with<'a>(items: &'a [TestItem], value: impl Fn(usize) -> f64) -> Vec<ResultRow<'a>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let range = resolve(&item.reference, Gender::Male);
            let value = value(i);
            ResultRow {
                item,
                value,
                status: range.classify(value),
                range,
                reference_text: selected_segment(&item.reference, Gender::Male).to_string(),
            }
        })
        .collect()
}

fn builtin_renderer(kind: TemplateKind) -> ReportRenderer {
    ReportRenderer::new(kind, Arc::new(Typeface::Builtin))
}

fn count_text(layout: &Layout, needle: &str) -> usize {
    layout.texts().filter(|(_, _, text)| *text == needle).count()
}

// Two-column geometry with the built-in font:
// title at y=80, 11px high, +60 => patient block at 151;
// 7 lines × 45 + 80 => headers at 546; +60 rule at 606; +40 rows at 646.
const TWO_COL_HEADER_Y: i32 = 546;
const TWO_COL_RULE_Y: i32 = 606;
const TWO_COL_ROW_Y: i32 = 646;

#[test]
fn two_column_title_is_centered() {
    let catalog = Catalog::for_template(TemplateKind::TwoColumn);
    let panels = catalog
        .panels()
        .iter()
        .map(|panel| rows_with(panel, |_| 1.0))
        .collect();
    let report = Report::new(patient(), panels);
    let layout = builtin_renderer(TemplateKind::TwoColumn).layout(&report);

    assert_eq!((layout.width, layout.height), (2480, 1748));
    // Ten wide glyphs: (2480 - 110) / 2.
    assert_eq!(layout.position_of("知己知医血常规报告单"), Some((1185, 80)));
}

#[test]
fn two_column_patient_block() {
    let report = Report::new(patient(), vec![Vec::new(), Vec::new()]);
    let layout = builtin_renderer(TemplateKind::TwoColumn).layout(&report);
    let header: Vec<String> = layout
        .texts()
        .skip(1)
        .take(12)
        .map(|(x, y, text)| format!("{x},{y} {text}"))
        .collect();

    insta::assert_snapshot!(header.join("\n"), @r"
    80,151 姓    名：张三
    80,196 病    案：BA123456
    80,241 费    别：医保
    80,286 标本编号：31
    80,331 性    别：男
    80,376 申请科室：内科
    80,421 送检医师：王伟
    1250,151 条码编号：TM654321
    1250,196 年    龄：42
    1250,241 床    号：12-3
    1250,286 标本种类：全血
    1250,331 临床诊断：健康体检
    ");
}

#[test]
fn two_column_headers_drawn_once_per_column_group() {
    let report = Report::new(patient(), vec![Vec::new(), Vec::new()]);
    let layout = builtin_renderer(TemplateKind::TwoColumn).layout(&report);

    for header in two_column::HEADERS {
        assert_eq!(count_text(&layout, header), 2, "{header}");
    }
    let positions: Vec<(i32, i32)> = layout
        .texts()
        .filter(|(_, _, text)| *text == "序号代码")
        .map(|(x, y, _)| (x, y))
        .collect();
    assert_eq!(
        positions,
        vec![
            (two_column::LEFT_TABLE_X, TWO_COL_HEADER_Y),
            (two_column::RIGHT_TABLE_X, TWO_COL_HEADER_Y)
        ]
    );
    let rules: Vec<&DrawOp> = layout.rules().collect();
    assert_eq!(
        rules,
        vec![&DrawOp::Rule {
            x0: 80,
            x1: 2400,
            y: TWO_COL_RULE_Y,
            thickness: 2,
            color: image::Rgb([0, 0, 0]),
        }]
    );
}

#[test]
fn two_column_marker_sits_between_result_and_unit() {
    let left = vec![TestItem::new(1, Some("WBC"), "白细胞", "10^9/L", "4-10")];
    let right = vec![
        TestItem::new(14, Some("LYMPH#"), "淋巴细胞数", "10^9/L", "0.8-4"),
        TestItem::new(15, Some("NEUT#"), "中性细胞数", "10^9/L", "2-7"),
    ];
    let left_rows = rows_with(&left, |_| 12.5);
    let right_rows = rows_with(&right, |i| if i == 0 { 0.5 } else { 4.25 });
    let report = Report::new(patient(), vec![left_rows, right_rows]);
    let layout = builtin_renderer(TemplateKind::TwoColumn).layout(&report);

    // Result column starts 160 + 250 past the table edge and is 120 wide.
    assert_eq!(
        layout.position_of("↑"),
        Some((80 + 410 + 120 - 30, TWO_COL_ROW_Y))
    );
    assert_eq!(
        layout.position_of("↓"),
        Some((1180 + 410 + 120 - 30, TWO_COL_ROW_Y))
    );
    // Only the two abnormal rows carry a marker.
    assert_eq!(count_text(&layout, "↑") + count_text(&layout, "↓"), 2);

    // "12.50" is 30px wide: 490 + (120 - 30) / 2 - 20.
    assert_eq!(layout.position_of("12.50"), Some((515, TWO_COL_ROW_Y)));
    // "4.25" is 24px wide and sits on the second row.
    assert_eq!(
        layout.position_of("4.25"),
        Some((1590 + 48 - 20, TWO_COL_ROW_Y + 42))
    );
    assert_eq!(layout.position_of("14 LYMPH#"), Some((1190, TWO_COL_ROW_Y)));
    assert_eq!(layout.position_of("10^9/L"), Some((620, TWO_COL_ROW_Y)));
    assert_eq!(layout.position_of("4-10"), Some((740, TWO_COL_ROW_Y)));
}

#[test]
fn two_column_footer_follows_longest_panel() {
    let catalog = Catalog::for_template(TemplateKind::TwoColumn);
    let panels = catalog
        .panels()
        .iter()
        .map(|panel| rows_with(panel, |_| 1.0))
        .collect();
    let report = Report::new(patient(), panels);
    let layout = builtin_renderer(TemplateKind::TwoColumn).layout(&report);

    // 13 rows + 2 spare at 42px, then 60px gap.
    let footer_y = TWO_COL_ROW_Y + 15 * 42 + 60;
    assert_eq!(
        layout.position_of("修改时间：2024-03-01 06:30:00"),
        Some((80, footer_y))
    );
    assert_eq!(layout.position_of("审核者：刘洋"), Some((80, footer_y + 3 * 45)));
    // The blank line is skipped but still takes its slot.
    assert_eq!(layout.position_of("备注："), Some((80, footer_y + 5 * 45)));
    assert_eq!(
        layout.position_of("此结果仅对本样本负责！"),
        Some((80, footer_y + 6 * 45))
    );
}

#[test]
fn single_column_rows_and_markers() {
    let catalog = Catalog::for_template(TemplateKind::SingleColumn);
    let items = &catalog.panels()[0];
    // WBC below, RBC above, everything else at its lower bound.
    let rows = rows_with(items, |i| match i {
        0 => 1.0,
        1 => 9.99,
        _ => resolve(&items[i].reference, Gender::Male).low(),
    });
    let report = Report::new(patient(), vec![rows]);
    let layout = builtin_renderer(TemplateKind::SingleColumn).layout(&report);

    assert_eq!((layout.width, layout.height), (1000, 1800));
    let marker_x = 50 + 70 + 280 + 160 + 120 + 220 + 5;
    assert_eq!(layout.position_of("↓"), Some((marker_x, 380)));
    assert_eq!(layout.position_of("↑"), Some((marker_x, 430)));
    assert_eq!(count_text(&layout, "↑") + count_text(&layout, "↓"), 2);

    assert_eq!(layout.position_of("1.00"), Some((50 + 70 + 280 + 5, 380)));
    assert_eq!(layout.position_of("白细胞计数 WBC"), Some((125, 380)));
    assert_eq!(layout.position_of("C反应蛋白 CRP"), Some((125, 380 + 24 * 50)));

    // Header rule plus one rule under each of the 25 rows.
    assert_eq!(layout.rules().count(), 26);
    assert_eq!(
        layout.rules().last(),
        Some(&DrawOp::Rule {
            x0: 50,
            x1: 1020,
            y: 380 + 25 * 50 - 10,
            thickness: 1,
            color: image::Rgb([0x99, 0x99, 0x99]),
        })
    );
    for header in single_column::HEADERS {
        assert_eq!(count_text(&layout, header), 1, "{header}");
    }
}

#[test]
fn single_column_patient_and_footer_text() {
    let report = Report::new(patient(), vec![Vec::new()]);
    let layout = builtin_renderer(TemplateKind::SingleColumn).layout(&report);

    assert_eq!(layout.position_of("姓名: 张三"), Some((50, 120)));
    assert_eq!(layout.position_of("标本: 全血"), Some((50, 270)));
    assert_eq!(
        layout.position_of("报告时间: 2024-03-01 09:30"),
        Some((600, 160))
    );
    assert_eq!(layout.position_of("审核者: 曹大夫"), Some((350, 1680)));
    assert_eq!(
        layout.position_of("本报告仅对本次送检标本负责"),
        Some((50, 1720))
    );
}

#[test]
fn overflowing_text_is_not_truncated() {
    let items = vec![TestItem::new(
        1,
        Some("WBC"),
        "一个非常非常非常非常非常非常长的项目名称",
        "10^9/L",
        "4-10",
    )];
    let rows = rows_with(&items, |_| 123_456_789.0);
    let report = Report::new(patient(), vec![rows, Vec::new()]);
    let layout = builtin_renderer(TemplateKind::TwoColumn).layout(&report);

    assert!(layout.position_of("123456789.00").is_some());
    assert!(
        layout
            .position_of("一个非常非常非常非常非常非常长的项目名称")
            .is_some()
    );
}

#[test]
fn rendered_image_has_canvas_size_and_ink() {
    let catalog = Catalog::for_template(TemplateKind::TwoColumn);
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let strategy = SamplingStrategy::for_template(TemplateKind::TwoColumn);
    let panels = sample_panels(&catalog, strategy, Gender::Male, &mut rng);
    let report = Report::new(patient(), panels);

    let img = builtin_renderer(TemplateKind::TwoColumn).render(&report);
    assert_eq!(img.dimensions(), (2480, 1748));
    // Corner stays background, the header rule is inked.
    assert_eq!(img.get_pixel(0, 0), &image::Rgb([255, 255, 255]));
    assert_eq!(
        img.get_pixel(1000, TWO_COL_RULE_Y as u32),
        &image::Rgb([0, 0, 0])
    );
    let dark = img.pixels().filter(|pixel| pixel.0[0] < 128).count();
    assert!(dark > 1000, "{dark}");
}
