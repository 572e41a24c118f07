//! Personal name sources.

use labrep_model::Gender;
use rand::RngCore;
use rand::seq::SliceRandom;

/// Supplies random personal names.
///
/// Patient names follow the patient's gender; professional names (physician,
/// examiner, reviewer) are drawn without regard to gender.
pub trait NameSource {
    fn person_name(&self, gender: Gender, rng: &mut dyn RngCore) -> String;
    fn professional_name(&self, rng: &mut dyn RngCore) -> String;
}

const SURNAMES: &[&str] = &[
    "王", "李", "张", "刘", "陈", "杨", "黄", "赵", "吴", "周", "徐", "孙", "马", "朱", "胡",
    "郭", "何", "高", "林", "罗", "郑", "梁", "谢", "宋", "唐", "许", "韩", "冯", "邓", "曹",
    "彭", "曾", "肖", "田", "董", "袁", "潘", "于", "蒋", "蔡", "余", "杜", "叶", "程", "苏",
    "魏", "吕", "丁", "任", "沈", "姚", "卢", "姜", "崔", "钟", "谭", "陆", "汪", "范", "金",
];

const MALE_GIVEN: &[&str] = &[
    "伟", "强", "磊", "军", "洋", "勇", "杰", "涛", "明", "超", "刚", "平", "辉", "鹏", "华",
    "飞", "鑫", "波", "斌", "宇", "浩", "凯", "健", "俊", "帆", "建华", "建国", "志强", "海涛",
    "文博", "子轩", "宇航", "国庆", "晓东", "永强",
];

const FEMALE_GIVEN: &[&str] = &[
    "芳", "娜", "敏", "静", "丽", "艳", "娟", "霞", "秀英", "玉兰", "桂英", "婷", "雪", "慧",
    "莹", "颖", "琳", "倩", "欣怡", "雨涵", "梓涵", "佳怡", "晓燕", "淑珍", "丹", "萍", "红",
    "玲", "燕", "洁",
];

/// Built-in zh-CN name table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZhCnNames;

impl ZhCnNames {
    fn compose(given: &[&str], rng: &mut dyn RngCore) -> String {
        let surname = SURNAMES.choose(rng).copied().unwrap_or("王");
        let given = given.choose(rng).copied().unwrap_or("明");
        format!("{surname}{given}")
    }
}

impl NameSource for ZhCnNames {
    fn person_name(&self, gender: Gender, rng: &mut dyn RngCore) -> String {
        match gender {
            Gender::Male => Self::compose(MALE_GIVEN, rng),
            Gender::Female => Self::compose(FEMALE_GIVEN, rng),
        }
    }

    fn professional_name(&self, rng: &mut dyn RngCore) -> String {
        if rng.next_u32() % 2 == 0 {
            Self::compose(MALE_GIVEN, rng)
        } else {
            Self::compose(FEMALE_GIVEN, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn person_names_draw_from_gendered_tables() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let name = ZhCnNames.person_name(Gender::Female, &mut rng);
            let surname: String = name.chars().take(1).collect();
            let given: String = name.chars().skip(1).collect();
            assert!(SURNAMES.contains(&surname.as_str()), "{name}");
            assert!(FEMALE_GIVEN.contains(&given.as_str()), "{name}");
        }
    }
}
