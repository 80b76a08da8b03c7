//! # Estekhara Catalog
//!
//! The fixed set of scripture entries an Estekhara run draws from. Every
//! shipped entry is [`Polarity::Positive`]; the result renderer supports
//! a negative outcome, but no catalog entry produces one.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Outcome leaning of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
}

/// One scripture entry: the verse, its translation, and the reading
/// offered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyahEntry {
    pub surah: String,
    pub ayah_number: String,
    pub text: String,
    pub translation: String,
    pub interpretation: String,
    pub polarity: Polarity,
}

static CATALOG: OnceLock<Vec<AyahEntry>> = OnceLock::new();

/// The built-in catalog. Non-empty by construction.
pub fn estekhara_catalog() -> &'static [AyahEntry] {
    CATALOG.get_or_init(build_catalog).as_slice()
}

fn entry(
    surah: &str,
    ayah_number: &str,
    text: &str,
    translation: &str,
    interpretation: &str,
) -> AyahEntry {
    AyahEntry {
        surah: surah.to_string(),
        ayah_number: ayah_number.to_string(),
        text: text.to_string(),
        translation: translation.to_string(),
        interpretation: interpretation.to_string(),
        polarity: Polarity::Positive,
    }
}

fn build_catalog() -> Vec<AyahEntry> {
    vec![
        entry(
            "البقره",
            "۲۸۶",
            "لَا يُكَلِّفُ اللَّهُ نَفْسًا إِلَّا وُسْعَهَا",
            "خداوند هیچ کس را جز به اندازه توانایی‌اش تکلیف نمی‌کند",
            "این آیه نشان می‌دهد که خداوند برای شما آسانی قرار داده است. در این کار با توکل به خدا پیش بروید و از توان خود استفاده کنید.",
        ),
        entry(
            "یوسف",
            "۸۷",
            "وَلَا تَيْأَسُوا مِن رَّوْحِ اللَّهِ",
            "از رحمت خدا نومید نشوید",
            "این آیه به شما امید می‌دهد. هر چند ممکن است موانعی وجود داشته باشد، اما با امید به خدا و تلاش مستمر، به نتیجه خواهید رسید.",
        ),
        entry(
            "الشرح",
            "۶",
            "إِنَّ مَعَ الْعُسْرِ يُسْرًا",
            "همانا با هر سختی آسانی است",
            "این آیه نوید آسانی را می‌دهد. اگر در ابتدا سختی احساس کردید، بدانید که پس از آن آسانی خواهد آمد. با صبر و استقامت ادامه دهید.",
        ),
        entry(
            "الرحمن",
            "۱۳",
            "فَبِأَيِّ آلَاءِ رَبِّكُمَا تُكَذِّبَانِ",
            "پس کدام یک از نعمت‌های پروردگارتان را انکار می‌کنید",
            "خداوند نعمت‌های بسیاری به شما داده است. در این تصمیم به نعمت‌های موجود توجه کنید و با قدردانی پیش بروید.",
        ),
        entry(
            "النحل",
            "۹۷",
            "مَنْ عَمِلَ صَالِحًا مِّن ذَكَرٍ أَوْ أُنثَىٰ وَهُوَ مُؤْمِنٌ فَلَنُحْيِيَنَّهُ حَيَاةً طَيِّبَةً",
            "هر کس عمل صالح انجام دهد، مرد یا زن، در حالی که مؤمن باشد، زندگی پاکیزه به او عطا خواهیم کرد",
            "عمل شما باید با نیت خالصانه و ایمان همراه باشد. اگر این کار را با نیت خیر انجام دهید، به زندگی بهتری دست خواهید یافت.",
        ),
        entry(
            "الطلاق",
            "۳",
            "وَمَن يَتَوَكَّلْ عَلَى اللَّهِ فَهُوَ حَسْبُهُ",
            "و هر کس بر خدا توکل کند، خدا او را کافی است",
            "توکل به خدا کلید موفقیت شماست. با اعتماد به خداوند و تلاش خود، این کار را انجام دهید.",
        ),
        entry(
            "البقره",
            "۲۱۶",
            "وَعَسَىٰ أَن تَكْرَهُوا شَيْئًا وَهُوَ خَيْرٌ لَّكُمْ",
            "و شاید چیزی را ناخوش دارید در حالی که برای شما خیر است",
            "گاهی چیزی که در ظاهر ناخوشایند است، در باطن خیر شماست. با تفکر عمیق و مشورت تصمیم بگیرید.",
        ),
        entry(
            "آل عمران",
            "۱۵۹",
            "فَإِذَا عَزَمْتَ فَتَوَكَّلْ عَلَى اللَّهِ",
            "پس هنگامی که تصمیم گرفتی، بر خدا توکل کن",
            "زمان تصمیم‌گیری فرا رسیده است. با توکل به خدا و اعتماد به نفس، قدم بردارید.",
        ),
    ]
}
