use super::model::VoiceOption;

struct StaticVoice {
    id: &'static str,
    name: &'static str,
    gender: &'static str,
}

/// Voices shown when the live catalog cannot be loaded
const FALLBACK_VOICES: &[StaticVoice] = &[
    StaticVoice {
        id: "th-TH-PremwadeeNeural",
        name: "Premwadee (Female, gentle)",
        gender: "Female",
    },
    StaticVoice {
        id: "th-TH-NiwatNeural",
        name: "Niwat (Male, warm)",
        gender: "Male",
    },
];

pub fn fallback_voices() -> Vec<VoiceOption> {
    FALLBACK_VOICES
        .iter()
        .map(|v| VoiceOption {
            id: v.id.to_string(),
            name: v.name.to_string(),
            gender: Some(v.gender.to_string()),
        })
        .collect()
}
