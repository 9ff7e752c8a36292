//! Curated edge-case name generation.
//!
//! Search indexes choke on exactly the text regular pools never produce:
//! diacritics, apostrophes, non-Latin scripts, and noisy user input. These
//! sets exercise those paths. Records are otherwise synthesized by the same
//! rules as regular ones, except the date of birth is drawn from the full
//! configured span rather than a stratified bucket.

use crate::generator::{GeneratorError, PersonGenerator};
use crate::values;
use person_core::{Gender, PersonRecord};
use rand::Rng;

/// A labeled set of (given, family) name pairs.
pub struct SpecialNameSet {
    pub label: &'static str,
    pub pairs: &'static [(&'static str, &'static str)],
}

pub const ACCENTED: &[(&str, &str)] = &[
    ("José", "García"),
    ("François", "Lévêque"),
    ("Müller", "Schröder"),
    ("Søren", "Ångström"),
    ("Renée", "Dubois"),
    ("Zoë", "Brontë"),
    ("Niña", "Pérez"),
    ("André", "Côté"),
    ("Maël", "Durand"),
    ("Björn", "Åkesson"),
    ("João", "Silva"),
    ("Élodie", "Lemoine"),
    ("Álvaro", "Iglesias"),
    ("İsmail", "Yılmaz"),
    ("Łukasz", "Kowalski"),
    ("Čedomir", "Nikolić"),
    ("Øyvind", "Hansen"),
    ("Þór", "Sigurðsson"),
];

pub const APOSTROPHE_HYPHEN: &[(&str, &str)] = &[
    ("Liam", "O’Connor"),
    ("Ava", "D’Souza"),
    ("Noah", "Jean-Luc"),
    ("Emma", "Mary-Anne"),
    ("Jack", "Smith-Jones"),
    ("Ella", "O'Reilly"),
    ("Lucas", "Ch’ien"),
    ("Mia", "T’ang"),
    ("Olivia", "D'Arcy"),
    ("Ethan", "Mc’Neil"),
    ("Jacob", "M’Baku"),
    ("Isla", "N’Dour"),
    ("Leo", "O’Malley"),
    ("Chloe", "De’Luca"),
    ("Freya", "D’Urbano"),
    ("Harry", "St’one"),
];

pub const ARABIC: &[(&str, &str)] = &[
    ("محمد", "الهاشمي"),
    ("فاطمة", "السعودي"),
    ("سلمان", "التميمي"),
    ("زينب", "العلي"),
    ("عبدالله", "العمر"),
    ("خالد", "القحطاني"),
    ("علي", "المهدي"),
    ("هاجر", "الشريف"),
    ("ياسر", "الخطيب"),
    ("ليلى", "الدوسري"),
    ("أحمد", "البغدادي"),
    ("منصور", "الأنصاري"),
    ("هدى", "الناصر"),
    ("سارة", "الفارس"),
    ("عائشة", "الحسني"),
    ("بلال", "المصري"),
];

pub const CHINESE: &[(&str, &str)] = &[
    ("小明", "王"),
    ("华", "李"),
    ("强", "张"),
    ("丽", "赵"),
    ("芳", "孙"),
    ("伟", "周"),
    ("杰", "吴"),
    ("敏", "郑"),
    ("娜", "冯"),
    ("军", "陈"),
    ("婷", "卫"),
    ("霞", "蒋"),
    ("艳", "沈"),
    ("刚", "韩"),
    ("雪", "朱"),
    ("龙", "秦"),
];

pub const KOREAN: &[(&str, &str)] = &[
    ("민수", "김"),
    ("지훈", "박"),
    ("서연", "이"),
    ("지민", "최"),
    ("현우", "정"),
    ("수빈", "조"),
    ("예준", "윤"),
    ("하준", "장"),
    ("도윤", "임"),
    ("예은", "오"),
    ("시우", "안"),
    ("지아", "황"),
    ("서윤", "송"),
    ("하린", "홍"),
    ("다은", "양"),
    ("채원", "전"),
];

pub const JAPANESE: &[(&str, &str)] = &[
    ("さくら", "高橋"),
    ("たろう", "佐藤"),
    ("ゆうこ", "鈴木"),
    ("しんじ", "山田"),
    ("けんた", "伊藤"),
    ("はるか", "渡辺"),
    ("なおき", "中村"),
    ("みさき", "小林"),
    ("あきら", "加藤"),
    ("ゆり", "吉田"),
    ("たかし", "山本"),
    ("かな", "佐々木"),
    ("ひろし", "松本"),
    ("えり", "井上"),
    ("まさし", "木村"),
    ("あや", "林"),
];

/// The fixed curated sets, in emission order.
pub const SPECIAL_NAME_SETS: &[SpecialNameSet] = &[
    SpecialNameSet {
        label: "accented",
        pairs: ACCENTED,
    },
    SpecialNameSet {
        label: "apostrophe_hyphen",
        pairs: APOSTROPHE_HYPHEN,
    },
    SpecialNameSet {
        label: "arabic",
        pairs: ARABIC,
    },
    SpecialNameSet {
        label: "chinese",
        pairs: CHINESE,
    },
    SpecialNameSet {
        label: "korean",
        pairs: KOREAN,
    },
    SpecialNameSet {
        label: "japanese",
        pairs: JAPANESE,
    },
];

/// Base names the noisy transforms are applied to.
pub const NOISY_BASE: &[&str] = &[
    "Jose", "Mary", "John", "Alex", "Calvin", "Helene", "Anais", "Grace", "Freya", "Oscar",
    "Emily", "Liam", "Noah", "Isla", "Ethan", "Chloe", "Mason", "Olivia", "Leo", "Ava",
];

/// Apply one randomly-chosen fuzzing transform to a name.
fn noisy_variant<R: Rng>(rng: &mut R, base: &str) -> String {
    match rng.gen_range(0..5u8) {
        0 => base.replacen('e', "é", 1),
        1 => base.replacen('a', "@", 1),
        2 => base.replacen(|c| c == 'o' || c == 'O', "0", 1),
        3 => format!("{base}{}", values::pick(rng, &["!", "#", "🔥", "😎"])),
        _ => base.chars().rev().collect(),
    }
}

/// Generate `per_set` records from each curated set, plus `per_set` noisy
/// variants, using the generator's RNG stream.
pub fn generate_special_people(
    generator: &mut PersonGenerator,
    per_set: usize,
) -> Result<Vec<PersonRecord>, GeneratorError> {
    let mut out = Vec::with_capacity((SPECIAL_NAME_SETS.len() + 1) * per_set);

    for set in SPECIAL_NAME_SETS {
        for _ in 0..per_set {
            let &(given, family) = values::pick(&mut generator.rng, set.pairs);
            let gender = *values::pick(&mut generator.rng, &Gender::ALL);
            out.push(generator.next_named_person(given, family, gender)?);
        }
    }

    for _ in 0..per_set {
        let base = *values::pick(&mut generator.rng, NOISY_BASE);
        let given = noisy_variant(&mut generator.rng, base);
        let family_base = *values::pick(&mut generator.rng, crate::names::FAMILY);
        let family = noisy_variant(&mut generator.rng, family_base);
        let gender = *values::pick(&mut generator.rng, &Gender::ALL);
        out.push(generator.next_named_person(&given, &family, gender)?);
    }

    Ok(out)
}
