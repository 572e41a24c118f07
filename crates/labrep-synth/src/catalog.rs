//! Static complete-blood-count panels for each report template.

use labrep_model::{TemplateKind, TestItem};

/// `(code, name, unit, reference)`; sequence numbers follow table order.
type ItemRow = (Option<&'static str>, &'static str, &'static str, &'static str);

const SINGLE_COLUMN: &[ItemRow] = &[
    (None, "白细胞计数 WBC", "10^9/L", "3.5-9.5"),
    (None, "红细胞计数 RBC", "10^12/L", "4.3-5.8"),
    (None, "血红蛋白 HGB", "g/L", "130-175"),
    (None, "红细胞压积 HCT", "%", "40-50"),
    (None, "平均红细胞体积 MCV", "fL", "80-100"),
    (None, "平均血红蛋白含量 MCH", "pg", "27-34"),
    (None, "平均血红蛋白浓度 MCHC", "g/L", "320-360"),
    (None, "红细胞体积分布宽度 RDW-CV", "%", "11-16"),
    (None, "血小板计数 PLT", "10^9/L", "125-350"),
    (None, "平均血小板体积 MPV", "fL", "7.5-11.5"),
    (None, "血小板分布宽度 PDW", "%", "10-18"),
    (None, "大血小板比率 P-LCR", "%", "13-43"),
    (None, "中性粒细胞比率 NEUT%", "%", "40-75"),
    (None, "中性粒细胞绝对值 NEUT#", "10^9/L", "1.8-6.3"),
    (None, "淋巴细胞比率 LYM%", "%", "20-50"),
    (None, "淋巴细胞绝对值 LYM#", "10^9/L", "1.1-3.2"),
    (None, "单核细胞比率 MONO%", "%", "3-10"),
    (None, "单核细胞绝对值 MONO#", "10^9/L", "0.1-0.6"),
    (None, "嗜酸细胞比率 EOS%", "%", "0.5-5"),
    (None, "嗜酸细胞绝对值 EOS#", "10^9/L", "0.02-0.5"),
    (None, "嗜碱细胞比率 BASO%", "%", "0-1"),
    (None, "嗜碱细胞绝对值 BASO#", "10^9/L", "0-0.06"),
    (None, "红细胞分布宽度 SD-RDW", "fL", "35-56"),
    (None, "血沉 ESR", "mm/h", "0-15"),
    (None, "C反应蛋白 CRP", "mg/L", "0-8"),
];

const TWO_COLUMN_LEFT: &[ItemRow] = &[
    (Some("WBC"), "白细胞", "10^9/L", "4-10"),
    (Some("RBC"), "红细胞", "10^12/L", "3.5-5.5"),
    (Some("HGB"), "血红蛋白", "g/L", "110-160"),
    (Some("HCT"), "红细胞压积", "%", "36-50"),
    (Some("MCV"), "红细胞平均体积", "fL", "82-100"),
    (Some("MCH"), "平均血红蛋白量", "pg", "25-32"),
    (Some("MCHC"), "平均血红蛋白浓度", "g/L", "320-360"),
    (Some("PLT"), "血小板", "10^9/L", "100-300"),
    (Some("LYMPH%"), "淋巴细胞比率", "%", "20-40"),
    (Some("NEUT%"), "中性细胞比率", "%", "50-70"),
    (Some("MONO%"), "单核细胞比率", "%", "3-8"),
    (Some("EO%"), "嗜酸性粒细胞比率", "%", "0.5-5"),
    (Some("BASO%"), "嗜碱性粒细胞比率", "%", "0-1"),
];

const TWO_COLUMN_RIGHT: &[ItemRow] = &[
    (Some("LYMPH#"), "淋巴细胞数", "10^9/L", "0.8-4"),
    (Some("NEUT#"), "中性细胞数", "10^9/L", "2-7"),
    (Some("MONO#"), "单核细胞", "10^9/L", "0-0.8"),
    (Some("EO#"), "嗜酸性粒细胞", "10^9/L", "0.05-0.5"),
    (Some("BASO#"), "嗜碱性粒细胞", "10^9/L", "0-0.1"),
    (Some("RDW-CV"), "红细胞分布宽度CV", "%", "10.9-15.4"),
    (Some("RDW-SD"), "红细胞分布宽度SD", "fL", "37-54"),
    (Some("PDW"), "血小板分布宽度", "fL", "9-17"),
    (Some("MPV"), "平均血小板体积", "fL", "9-13"),
    (Some("PCT"), "血小板压积", "%", "0.17-0.35"),
    (Some("P-LCR"), "大型血小板比率", "%", "13-43"),
    (Some("ESR"), "血沉", "mm/h", "男：0-15,女：0-20"),
];

/// Ordered test items grouped into panels (one per table column group).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    kind: TemplateKind,
    panels: Vec<Vec<TestItem>>,
}

impl Catalog {
    /// Build the catalog used by a report template.
    pub fn for_template(kind: TemplateKind) -> Self {
        let tables: &[&[ItemRow]] = match kind {
            TemplateKind::SingleColumn => &[SINGLE_COLUMN],
            TemplateKind::TwoColumn => &[TWO_COLUMN_LEFT, TWO_COLUMN_RIGHT],
        };
        let mut seq = 0;
        let panels = tables
            .iter()
            .map(|table| {
                table
                    .iter()
                    .map(|&(code, name, unit, reference)| {
                        seq += 1;
                        TestItem::new(seq, code, name, unit, reference)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { kind, panels }
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn panels(&self) -> &[Vec<TestItem>] {
        &self.panels
    }

    pub fn items(&self) -> impl Iterator<Item = &TestItem> {
        self.panels.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.panels.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
