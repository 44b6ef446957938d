//! Yoga routines and guided meditation sessions.

use serde::Serialize;

use crate::i18n::{Language, Text};

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

#[derive(Debug, Clone, Copy)]
pub struct Pose {
    pub name: Text,
    pub benefit: Text,
}

#[derive(Debug, Clone, Copy)]
pub struct YogaRoutine {
    pub id: &'static str,
    pub title: Text,
    pub video_id: &'static str,
    pub poses: &'static [Pose],
}

#[derive(Debug, Clone, Copy)]
pub struct MeditationSession {
    pub id: &'static str,
    pub title: Text,
    pub description: Text,
    pub video_id: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PoseView {
    pub name: String,
    pub benefit: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct YogaRoutineView {
    pub id: &'static str,
    pub title: String,
    pub video_url: String,
    pub poses: Vec<PoseView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeditationView {
    pub id: &'static str,
    pub title: String,
    pub description: String,
    pub video_url: String,
}

fn embed_url(video_id: &str) -> String {
    format!("{EMBED_BASE}{video_id}")
}

impl YogaRoutine {
    #[must_use]
    pub fn localize(&self, lang: Language) -> YogaRoutineView {
        YogaRoutineView {
            id: self.id,
            title: self.title.get(lang),
            video_url: embed_url(self.video_id),
            poses: self
                .poses
                .iter()
                .map(|pose| PoseView { name: pose.name.get(lang), benefit: pose.benefit.get(lang) })
                .collect(),
        }
    }
}

impl MeditationSession {
    #[must_use]
    pub fn localize(&self, lang: Language) -> MeditationView {
        MeditationView {
            id: self.id,
            title: self.title.get(lang),
            description: self.description.get(lang),
            video_url: embed_url(self.video_id),
        }
    }
}

#[must_use]
pub fn yoga_routines() -> &'static [YogaRoutine] {
    YOGA
}

#[must_use]
pub fn meditation_sessions() -> &'static [MeditationSession] {
    MEDITATION
}

// =============================================================================
// CATALOG
// =============================================================================

static YOGA: &[YogaRoutine] = &[
    YogaRoutine {
        id: "morning",
        title: Text::new("Morning Yoga", "सुबह का योग"),
        video_id: "OMu6OKF5Z1k",
        poses: &[
            Pose {
                name: Text::new("Sun Salutation (Surya Namaskar)", "सूर्य नमस्कार"),
                benefit: Text::new("Energizes the body", "शरीर को ऊर्जावान बनाता है"),
            },
            Pose {
                name: Text::new("Child's Pose", "बालासन"),
                benefit: Text::new("Calms the mind", "मन को शांत करता है"),
            },
        ],
    },
    YogaRoutine {
        id: "weight-loss",
        title: Text::new("Weight Loss", "वजन घटाने के लिए"),
        video_id: "digpucxFbMo",
        poses: &[
            Pose {
                name: Text::new("Plank Pose", "फलकासन"),
                benefit: Text::new("Strengthens core", "कोर को मजबूत करता है"),
            },
            Pose {
                name: Text::new("Warrior II", "वीरभद्रासन II"),
                benefit: Text::new("Tones legs and arms", "पैरों और हाथों को टोन करता है"),
            },
        ],
    },
    YogaRoutine {
        id: "diabetes",
        title: Text::new("Yoga for Diabetes", "मधुमेह के लिए योग"),
        video_id: "fmh58tykgpo",
        poses: &[
            Pose {
                name: Text::new("Seated Forward Bend", "पश्चिमोत्तानासन"),
                benefit: Text::new("Massages abdominal organs", "पेट के अंगों की मालिश करता है"),
            },
            Pose {
                name: Text::new("Spinal Twist", "अर्ध मत्स्येंद्रासन"),
                benefit: Text::new("Regulates insulin levels", "इंसुलिन स्तर को नियंत्रित करता है"),
            },
        ],
    },
    YogaRoutine {
        id: "back-pain",
        title: Text::new("Yoga for Back Pain", "पीठ दर्द के लिए योग"),
        video_id: "ulvc5Gd6INcf4GiG",
        poses: &[
            Pose {
                name: Text::new("Cat-Cow Pose", "मार्जरीआसन"),
                benefit: Text::new("Improves spinal flexibility", "रीढ़ की हड्डी के लचीलेपन में सुधार करता है"),
            },
            Pose {
                name: Text::new("Cobra Pose", "भुजंगासन"),
                benefit: Text::new("Relieves lower back stiffness", "पीठ के निचले हिस्से की जकड़न को दूर करता है"),
            },
        ],
    },
    YogaRoutine {
        id: "stress",
        title: Text::new("Stress & Anxiety", "तनाव और चिंता"),
        video_id: "sTANio_2E0Q",
        poses: &[
            Pose {
                name: Text::new("Legs Up the Wall", "विपरीत करणी"),
                benefit: Text::new("Reduces anxiety", "चिंता कम करता है"),
            },
            Pose { name: Text::new("Corpse Pose", "शवासन"), benefit: Text::new("Deep relaxation", "गहरी विश्राम") },
        ],
    },
];

static MEDITATION: &[MeditationSession] = &[
    MeditationSession {
        id: "mindfulness",
        title: Text::new("Mindfulness Meditation", "सचेतन ध्यान"),
        description: Text::new(
            "Focus on the present moment without judgment. Great for reducing stress and improving focus.",
            "बिना किसी निर्णय के वर्तमान क्षण पर ध्यान केंद्रित करें। तनाव कम करने और ध्यान सुधारने के लिए बेहतरीन है।",
        ),
        video_id: "inpok4MKVLM",
    },
    MeditationSession {
        id: "sleep",
        title: Text::new("Deep Sleep Meditation", "गहरी नींद का ध्यान"),
        description: Text::new(
            "Guided relaxation to help you fall into a peaceful and deep sleep.",
            "आपको शांतिपूर्ण और गहरी नींद में जाने में मदद करने के लिए निर्देशित विश्राम।",
        ),
        video_id: "aEqlQvczNJQ",
    },
    MeditationSession {
        id: "anxiety",
        title: Text::new("Anxiety Relief", "चिंता से राहत"),
        description: Text::new(
            "Calm your nervous system and release tension from the body.",
            "अपने तंत्रिका तंत्र को शांत करें और शरीर से तनाव मुक्त करें।",
        ),
        video_id: "WWovodeugO8",
    },
    MeditationSession {
        id: "morning",
        title: Text::new("Morning Energy", "सुबह की ऊर्जा"),
        description: Text::new(
            "Start your day with positive intentions and vibrant energy.",
            "सकारात्मक इरादों और जीवंत ऊर्जा के साथ अपने दिन की शुरुआत करें।",
        ),
        video_id: "ZToicYcHIOU",
    },
];

#[cfg(test)]
#[path = "practice_test.rs"]
mod tests;
