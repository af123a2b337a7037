use serde::Deserialize;

/// A single dictionary entry as returned by the dictionary API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Word {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<WordMeaning>,
}

impl Word {
    /// Audio clip of the first phonetics entry. The API sends an empty string
    /// for entries without a recording, which is treated as no audio.
    pub fn audio(&self) -> Option<&str> {
        self.phonetics
            .first()
            .and_then(|phonetic| phonetic.audio.as_deref())
            .filter(|audio| !audio.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<WordDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl WordMeaning {
    /// The first `limit` synonyms joined by commas, or `None` if there are none.
    pub fn synonym_preview(&self, limit: usize) -> Option<String> {
        if self.synonyms.is_empty() {
            return None;
        }
        Some(
            self.synonyms
                .iter()
                .take(limit)
                .map(String::as_str)
                .collect::<Vec<&str>>()
                .join(", "),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WordDefinition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}
