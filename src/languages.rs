//! Languages supported by the translation service

use std::fmt;

/// A supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub region: &'static str,
}

/// Region groups used to filter [`LANGUAGES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Global,
    Europe,
    Asia,
    MiddleEast,
    Africa,
    Americas,
    Pacific,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::Global,
        Region::Europe,
        Region::Asia,
        Region::MiddleEast,
        Region::Africa,
        Region::Americas,
        Region::Pacific,
    ];

    /// Whether a language's region label falls in this group
    fn contains(self, label: &str) -> bool {
        match self {
            Region::Global => label == "Global",
            Region::Europe => label.contains("Europe"),
            Region::Asia => label.contains("Asia"),
            Region::MiddleEast => label.contains("Middle East"),
            Region::Africa => label.contains("Africa"),
            Region::Americas => label.contains("Latin America") || label.contains("Caribbean"),
            Region::Pacific => label.contains("Pacific"),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Global => write!(f, "Global"),
            Region::Europe => write!(f, "Europe"),
            Region::Asia => write!(f, "Asia"),
            Region::MiddleEast => write!(f, "Middle East"),
            Region::Africa => write!(f, "Africa"),
            Region::Americas => write!(f, "Americas"),
            Region::Pacific => write!(f, "Pacific"),
        }
    }
}

/// Number of entries at the head of [`LANGUAGES`] that make up [`popular`]
const POPULAR_COUNT: usize = 20;

/// All supported languages, most used first
pub static LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English", region: "Global" },
    Language { code: "es", name: "Spanish", region: "Europe & Latin America" },
    Language { code: "fr", name: "French", region: "Europe & Africa" },
    Language { code: "de", name: "German", region: "Europe" },
    Language { code: "zh", name: "Chinese (Simplified)", region: "Asia" },
    Language { code: "zh-TW", name: "Chinese (Traditional)", region: "Asia" },
    Language { code: "ja", name: "Japanese", region: "Asia" },
    Language { code: "ko", name: "Korean", region: "Asia" },
    Language { code: "pt", name: "Portuguese", region: "Europe & Latin America" },
    Language { code: "ru", name: "Russian", region: "Europe" },
    Language { code: "it", name: "Italian", region: "Europe" },
    Language { code: "ar", name: "Arabic", region: "Middle East & North Africa" },
    Language { code: "hi", name: "Hindi", region: "South Asia" },
    Language { code: "nl", name: "Dutch", region: "Europe" },
    Language { code: "pl", name: "Polish", region: "Europe" },
    Language { code: "tr", name: "Turkish", region: "Europe & Middle East" },
    Language { code: "vi", name: "Vietnamese", region: "Southeast Asia" },
    Language { code: "th", name: "Thai", region: "Southeast Asia" },
    Language { code: "id", name: "Indonesian", region: "Southeast Asia" },
    Language { code: "sv", name: "Swedish", region: "Europe" },
    // remaining languages, alphabetical
    Language { code: "af", name: "Afrikaans", region: "Africa" },
    Language { code: "sq", name: "Albanian", region: "Europe" },
    Language { code: "am", name: "Amharic", region: "Africa" },
    Language { code: "hy", name: "Armenian", region: "Europe & Middle East" },
    Language { code: "az", name: "Azerbaijani", region: "Europe & Middle East" },
    Language { code: "eu", name: "Basque", region: "Europe" },
    Language { code: "be", name: "Belarusian", region: "Europe" },
    Language { code: "bn", name: "Bengali", region: "South Asia" },
    Language { code: "bs", name: "Bosnian", region: "Europe" },
    Language { code: "bg", name: "Bulgarian", region: "Europe" },
    Language { code: "ca", name: "Catalan", region: "Europe" },
    Language { code: "ceb", name: "Cebuano", region: "Southeast Asia" },
    Language { code: "ny", name: "Chichewa", region: "Africa" },
    Language { code: "co", name: "Corsican", region: "Europe" },
    Language { code: "hr", name: "Croatian", region: "Europe" },
    Language { code: "cs", name: "Czech", region: "Europe" },
    Language { code: "da", name: "Danish", region: "Europe" },
    Language { code: "eo", name: "Esperanto", region: "Global" },
    Language { code: "et", name: "Estonian", region: "Europe" },
    Language { code: "tl", name: "Filipino", region: "Southeast Asia" },
    Language { code: "fi", name: "Finnish", region: "Europe" },
    Language { code: "fy", name: "Frisian", region: "Europe" },
    Language { code: "gl", name: "Galician", region: "Europe" },
    Language { code: "ka", name: "Georgian", region: "Europe & Middle East" },
    Language { code: "el", name: "Greek", region: "Europe" },
    Language { code: "gu", name: "Gujarati", region: "South Asia" },
    Language { code: "ht", name: "Haitian Creole", region: "Caribbean" },
    Language { code: "ha", name: "Hausa", region: "Africa" },
    Language { code: "haw", name: "Hawaiian", region: "Pacific" },
    Language { code: "iw", name: "Hebrew", region: "Middle East" },
    Language { code: "hmn", name: "Hmong", region: "Asia" },
    Language { code: "hu", name: "Hungarian", region: "Europe" },
    Language { code: "is", name: "Icelandic", region: "Europe" },
    Language { code: "ig", name: "Igbo", region: "Africa" },
    Language { code: "ga", name: "Irish", region: "Europe" },
    Language { code: "jw", name: "Javanese", region: "Southeast Asia" },
    Language { code: "kn", name: "Kannada", region: "South Asia" },
    Language { code: "kk", name: "Kazakh", region: "Central Asia" },
    Language { code: "km", name: "Khmer", region: "Southeast Asia" },
    Language { code: "rw", name: "Kinyarwanda", region: "Africa" },
    Language { code: "ku", name: "Kurdish (Kurmanji)", region: "Middle East" },
    Language { code: "ky", name: "Kyrgyz", region: "Central Asia" },
    Language { code: "lo", name: "Lao", region: "Southeast Asia" },
    Language { code: "la", name: "Latin", region: "Europe" },
    Language { code: "lv", name: "Latvian", region: "Europe" },
    Language { code: "lt", name: "Lithuanian", region: "Europe" },
    Language { code: "lb", name: "Luxembourgish", region: "Europe" },
    Language { code: "mk", name: "Macedonian", region: "Europe" },
    Language { code: "mg", name: "Malagasy", region: "Africa" },
    Language { code: "ms", name: "Malay", region: "Southeast Asia" },
    Language { code: "ml", name: "Malayalam", region: "South Asia" },
    Language { code: "mt", name: "Maltese", region: "Europe" },
    Language { code: "mi", name: "Maori", region: "Pacific" },
    Language { code: "mr", name: "Marathi", region: "South Asia" },
    Language { code: "mn", name: "Mongolian", region: "Asia" },
    Language { code: "my", name: "Myanmar (Burmese)", region: "Southeast Asia" },
    Language { code: "ne", name: "Nepali", region: "South Asia" },
    Language { code: "no", name: "Norwegian", region: "Europe" },
    Language { code: "or", name: "Odia (Oriya)", region: "South Asia" },
    Language { code: "ps", name: "Pashto", region: "South Asia & Middle East" },
    Language { code: "fa", name: "Persian", region: "Middle East" },
    Language { code: "pa", name: "Punjabi", region: "South Asia" },
    Language { code: "ro", name: "Romanian", region: "Europe" },
    Language { code: "sm", name: "Samoan", region: "Pacific" },
    Language { code: "gd", name: "Scots Gaelic", region: "Europe" },
    Language { code: "sr", name: "Serbian", region: "Europe" },
    Language { code: "st", name: "Sesotho", region: "Africa" },
    Language { code: "sn", name: "Shona", region: "Africa" },
    Language { code: "sd", name: "Sindhi", region: "South Asia" },
    Language { code: "si", name: "Sinhala", region: "South Asia" },
    Language { code: "sk", name: "Slovak", region: "Europe" },
    Language { code: "sl", name: "Slovenian", region: "Europe" },
    Language { code: "so", name: "Somali", region: "Africa" },
    Language { code: "su", name: "Sundanese", region: "Southeast Asia" },
    Language { code: "sw", name: "Swahili", region: "Africa" },
    Language { code: "tg", name: "Tajik", region: "Central Asia" },
    Language { code: "ta", name: "Tamil", region: "South Asia" },
    Language { code: "tt", name: "Tatar", region: "Europe" },
    Language { code: "te", name: "Telugu", region: "South Asia" },
    Language { code: "tk", name: "Turkmen", region: "Central Asia" },
    Language { code: "uk", name: "Ukrainian", region: "Europe" },
    Language { code: "ur", name: "Urdu", region: "South Asia & Middle East" },
    Language { code: "ug", name: "Uyghur", region: "Central Asia" },
    Language { code: "uz", name: "Uzbek", region: "Central Asia" },
    Language { code: "cy", name: "Welsh", region: "Europe" },
    Language { code: "xh", name: "Xhosa", region: "Africa" },
    Language { code: "yi", name: "Yiddish", region: "Europe" },
    Language { code: "yo", name: "Yoruba", region: "Africa" },
    Language { code: "zu", name: "Zulu", region: "Africa" },
];

/// The most used languages
pub fn popular() -> &'static [Language] {
    &LANGUAGES[..POPULAR_COUNT]
}

pub fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Display name for `code`, or the code itself when unknown
pub fn language_name(code: &str) -> &str {
    find(code).map(|lang| lang.name).unwrap_or(code)
}

/// Case-insensitive match on name or code
pub fn search(query: &str) -> Vec<&'static Language> {
    let query = query.to_lowercase();
    LANGUAGES
        .iter()
        .filter(|lang| {
            lang.name.to_lowercase().contains(&query) || lang.code.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn by_region(region: Region) -> Vec<&'static Language> {
    LANGUAGES.iter().filter(|lang| region.contains(lang.region)).collect()
}
