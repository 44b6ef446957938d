//! Disease catalog, search and detail lookup.

use serde::Serialize;

use crate::i18n::{Language, Lines, Text};

#[derive(Debug, Clone, Copy)]
pub struct Disease {
    pub id: &'static str,
    pub name: Text,
    pub description: Text,
    pub causes: Lines,
    pub symptoms: Lines,
    pub remedies: Lines,
    pub yoga: Lines,
    pub dos: Lines,
    pub donts: Lines,
    pub consult: Text,
}

/// List-card view of a disease in one language.
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseSummary {
    pub id: &'static str,
    pub name: String,
    pub description: String,
}

/// Full detail page view of a disease in one language.
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseDetail {
    pub id: &'static str,
    pub name: String,
    pub description: String,
    pub causes: Vec<String>,
    pub symptoms: Vec<String>,
    pub remedies: Vec<String>,
    pub yoga: Vec<String>,
    pub dos: Vec<String>,
    pub donts: Vec<String>,
    pub consult: String,
}

impl Disease {
    #[must_use]
    pub fn summary(&self, lang: Language) -> DiseaseSummary {
        DiseaseSummary { id: self.id, name: self.name.get(lang), description: self.description.get(lang) }
    }

    #[must_use]
    pub fn detail(&self, lang: Language) -> DiseaseDetail {
        DiseaseDetail {
            id: self.id,
            name: self.name.get(lang),
            description: self.description.get(lang),
            causes: self.causes.get(lang),
            symptoms: self.symptoms.get(lang),
            remedies: self.remedies.get(lang),
            yoga: self.yoga.get(lang),
            dos: self.dos.get(lang),
            donts: self.donts.get(lang),
            consult: self.consult.get(lang),
        }
    }
}

/// All diseases in display order.
#[must_use]
pub fn diseases() -> &'static [Disease] {
    DISEASES
}

#[must_use]
pub fn find_disease(id: &str) -> Option<&'static Disease> {
    DISEASES.iter().find(|disease| disease.id == id)
}

#[must_use]
pub fn is_known_disease(id: &str) -> bool {
    find_disease(id).is_some()
}

/// Case-insensitive substring search over disease names in `lang`.
/// An empty (or blank) query matches everything.
#[must_use]
pub fn search_diseases(query: &str, lang: Language) -> Vec<&'static Disease> {
    let needle = query.trim().to_lowercase();
    DISEASES
        .iter()
        .filter(|disease| needle.is_empty() || disease.name.pick(lang).to_lowercase().contains(&needle))
        .collect()
}

// =============================================================================
// CATALOG
// =============================================================================

static DISEASES: &[Disease] = &[
    Disease {
        id: "diabetes",
        name: Text::new("Diabetes", "मधुमेह"),
        description: Text::new(
            "A chronic condition in which the body cannot regulate blood sugar properly.",
            "एक दीर्घकालिक स्थिति जिसमें शरीर रक्त शर्करा को ठीक से नियंत्रित नहीं कर पाता।",
        ),
        causes: Lines::new(
            &["Insulin resistance", "Family history", "Sedentary lifestyle and excess weight"],
            &["इंसुलिन प्रतिरोध", "पारिवारिक इतिहास", "निष्क्रिय जीवनशैली और अधिक वजन"],
        ),
        symptoms: Lines::new(
            &["Frequent urination", "Excessive thirst", "Slow healing of wounds"],
            &["बार-बार पेशाब आना", "अत्यधिक प्यास", "घाव देर से भरना"],
        ),
        remedies: Lines::new(
            &["Soaked fenugreek (methi) seeds in the morning", "Bitter gourd (karela) juice", "Cinnamon in warm water"],
            &["सुबह भीगे हुए मेथी दाने", "करेले का जूस", "गुनगुने पानी में दालचीनी"],
        ),
        yoga: Lines::new(
            &["Seated Forward Bend (Paschimottanasana)", "Spinal Twist (Ardha Matsyendrasana)"],
            &["पश्चिमोत्तानासन", "अर्ध मत्स्येंद्रासन"],
        ),
        dos: Lines::new(
            &["Check blood sugar regularly", "Walk 30 minutes daily", "Eat small, frequent meals"],
            &["नियमित रूप से शुगर जांचें", "रोज 30 मिनट टहलें", "थोड़ा-थोड़ा और बार-बार खाएं"],
        ),
        donts: Lines::new(
            &["Skip meals", "Drink sugary beverages", "Ignore foot injuries"],
            &["भोजन न छोड़ें", "मीठे पेय न पिएं", "पैरों की चोट को नज़रअंदाज़ न करें"],
        ),
        consult: Text::new(
            "Consult a doctor if fasting sugar stays above 126 mg/dL or you feel dizzy and confused.",
            "यदि खाली पेट शुगर 126 mg/dL से ऊपर रहे या चक्कर और भ्रम महसूस हो तो डॉक्टर से सलाह लें।",
        ),
    },
    Disease {
        id: "bp",
        name: Text::new("High Blood Pressure", "उच्च रक्तचाप"),
        description: Text::new(
            "Blood pushes against artery walls with too much force, straining the heart.",
            "रक्त धमनियों की दीवारों पर अधिक दबाव डालता है, जिससे हृदय पर जोर पड़ता है।",
        ),
        causes: Lines::new(
            &["High salt intake", "Stress", "Obesity and lack of exercise"],
            &["अधिक नमक का सेवन", "तनाव", "मोटापा और व्यायाम की कमी"],
        ),
        symptoms: Lines::new(
            &["Headache", "Dizziness", "Shortness of breath"],
            &["सिरदर्द", "चक्कर आना", "सांस फूलना"],
        ),
        remedies: Lines::new(
            &["Garlic clove in the morning", "Reduce salt", "Deep breathing for 10 minutes"],
            &["सुबह लहसुन की एक कली", "नमक कम करें", "10 मिनट गहरी सांस लें"],
        ),
        yoga: Lines::new(
            &["Corpse Pose (Shavasana)", "Alternate Nostril Breathing (Anulom Vilom)"],
            &["शवासन", "अनुलोम विलोम"],
        ),
        dos: Lines::new(
            &["Monitor blood pressure at home", "Eat potassium-rich fruits", "Sleep 7-8 hours"],
            &["घर पर रक्तचाप जांचें", "पोटैशियम युक्त फल खाएं", "7-8 घंटे सोएं"],
        ),
        donts: Lines::new(
            &["Eat pickles and papad daily", "Smoke", "Stop medicines without advice"],
            &["रोज अचार और पापड़ न खाएं", "धूम्रपान न करें", "बिना सलाह दवा बंद न करें"],
        ),
        consult: Text::new(
            "Seek help immediately for chest pain, severe headache or readings above 180/120.",
            "सीने में दर्द, तेज सिरदर्द या 180/120 से ऊपर रीडिंग पर तुरंत सहायता लें।",
        ),
    },
    Disease {
        id: "thyroid",
        name: Text::new("Thyroid Disorder", "थायराइड विकार"),
        description: Text::new(
            "The thyroid gland produces too much or too little hormone, affecting metabolism.",
            "थायराइड ग्रंथि बहुत अधिक या बहुत कम हार्मोन बनाती है, जिससे चयापचय प्रभावित होता है।",
        ),
        causes: Lines::new(
            &["Iodine deficiency", "Autoimmune conditions", "Hormonal changes"],
            &["आयोडीन की कमी", "ऑटोइम्यून रोग", "हार्मोनल बदलाव"],
        ),
        symptoms: Lines::new(
            &["Fatigue", "Unexplained weight change", "Hair fall"],
            &["थकान", "अचानक वजन बदलना", "बाल झड़ना"],
        ),
        remedies: Lines::new(
            &["Use iodised salt", "Brazil nuts or sunflower seeds for selenium", "Regular light exercise"],
            &["आयोडीन युक्त नमक का प्रयोग करें", "सेलेनियम के लिए सूरजमुखी के बीज", "नियमित हल्का व्यायाम"],
        ),
        yoga: Lines::new(
            &["Shoulder Stand (Sarvangasana)", "Fish Pose (Matsyasana)"],
            &["सर्वांगासन", "मत्स्यासन"],
        ),
        dos: Lines::new(
            &["Take medicine at the same time daily", "Get thyroid levels tested", "Eat balanced meals"],
            &["रोज एक ही समय पर दवा लें", "थायराइड जांच करवाएं", "संतुलित भोजन करें"],
        ),
        donts: Lines::new(
            &["Eat raw cabbage in excess", "Skip follow-up tests", "Take medicine with coffee"],
            &["कच्ची पत्तागोभी अधिक न खाएं", "जांच न टालें", "कॉफी के साथ दवा न लें"],
        ),
        consult: Text::new(
            "Consult a doctor for a swelling in the neck, rapid heartbeat or persistent fatigue.",
            "गले में सूजन, तेज धड़कन या लगातार थकान होने पर डॉक्टर से सलाह लें।",
        ),
    },
    Disease {
        id: "obesity",
        name: Text::new("Obesity", "मोटापा"),
        description: Text::new(
            "Excess body fat that increases the risk of heart disease, diabetes and joint pain.",
            "शरीर में अतिरिक्त चर्बी जो हृदय रोग, मधुमेह और जोड़ों के दर्द का खतरा बढ़ाती है।",
        ),
        causes: Lines::new(
            &["High-calorie diet", "Lack of physical activity", "Poor sleep"],
            &["अधिक कैलोरी वाला आहार", "शारीरिक गतिविधि की कमी", "खराब नींद"],
        ),
        symptoms: Lines::new(
            &["BMI of 30 or more", "Breathlessness on exertion", "Joint pain"],
            &["30 या अधिक बीएमआई", "मेहनत पर सांस फूलना", "जोड़ों में दर्द"],
        ),
        remedies: Lines::new(
            &["Lukewarm lemon water in the morning", "Triphala at night", "Daily brisk walk"],
            &["सुबह गुनगुना नींबू पानी", "रात में त्रिफला", "रोज तेज चाल से टहलना"],
        ),
        yoga: Lines::new(
            &["Sun Salutation (Surya Namaskar)", "Plank Pose (Phalakasana)"],
            &["सूर्य नमस्कार", "फलकासन"],
        ),
        dos: Lines::new(
            &["Fill half the plate with vegetables", "Drink plenty of water", "Track your weight weekly"],
            &["आधी थाली सब्जियों से भरें", "भरपूर पानी पिएं", "हर हफ्ते वजन जांचें"],
        ),
        donts: Lines::new(
            &["Eat late at night", "Crash diet", "Drink sugary sodas"],
            &["देर रात न खाएं", "अचानक भूखे न रहें", "मीठे सोडा न पिएं"],
        ),
        consult: Text::new(
            "Consult a doctor if weight rises quickly or you snore heavily and feel sleepy by day.",
            "यदि वजन तेजी से बढ़े या भारी खर्राटे और दिन में नींद आए तो डॉक्टर से सलाह लें।",
        ),
    },
    Disease {
        id: "asthma",
        name: Text::new("Asthma", "दमा"),
        description: Text::new(
            "Airways narrow and swell, making breathing difficult.",
            "सांस की नलियां सिकुड़ जाती हैं और सूज जाती हैं, जिससे सांस लेना कठिन हो जाता है।",
        ),
        causes: Lines::new(
            &["Dust and pollen allergies", "Air pollution", "Cold air and infections"],
            &["धूल और पराग से एलर्जी", "वायु प्रदूषण", "ठंडी हवा और संक्रमण"],
        ),
        symptoms: Lines::new(
            &["Wheezing", "Chest tightness", "Coughing at night"],
            &["सांस में घरघराहट", "सीने में जकड़न", "रात में खांसी"],
        ),
        remedies: Lines::new(
            &["Steam inhalation", "Ginger and honey", "Keep the home dust-free"],
            &["भाप लेना", "अदरक और शहद", "घर को धूल मुक्त रखें"],
        ),
        yoga: Lines::new(
            &["Bellows Breath (Bhastrika)", "Cobra Pose (Bhujangasana)"],
            &["भस्त्रिका प्राणायाम", "भुजंगासन"],
        ),
        dos: Lines::new(
            &["Carry your inhaler", "Wear a mask in pollution", "Warm up before exercise"],
            &["इनहेलर साथ रखें", "प्रदूषण में मास्क पहनें", "व्यायाम से पहले वार्म-अप करें"],
        ),
        donts: Lines::new(
            &["Smoke or sit near smokers", "Keep carpets that gather dust", "Drink very cold water"],
            &["धूम्रपान या धुएं के पास न बैठें", "धूल जमा करने वाले कालीन न रखें", "बहुत ठंडा पानी न पिएं"],
        ),
        consult: Text::new(
            "Get emergency care if lips turn blue or the inhaler does not relieve breathlessness.",
            "होंठ नीले पड़ने या इनहेलर से राहत न मिलने पर तुरंत आपातकालीन सहायता लें।",
        ),
    },
    Disease {
        id: "arthritis",
        name: Text::new("Arthritis", "गठिया"),
        description: Text::new(
            "Inflammation of the joints causing pain and stiffness.",
            "जोड़ों में सूजन जिससे दर्द और अकड़न होती है।",
        ),
        causes: Lines::new(
            &["Ageing and wear of cartilage", "Excess weight", "Autoimmune inflammation"],
            &["उम्र के साथ उपास्थि का घिसना", "अधिक वजन", "ऑटोइम्यून सूजन"],
        ),
        symptoms: Lines::new(
            &["Joint pain", "Morning stiffness", "Swelling around joints"],
            &["जोड़ों में दर्द", "सुबह अकड़न", "जोड़ों के आसपास सूजन"],
        ),
        remedies: Lines::new(
            &["Turmeric milk at night", "Warm mustard oil massage", "Gentle stretching"],
            &["रात में हल्दी वाला दूध", "गुनगुने सरसों तेल की मालिश", "हल्की स्ट्रेचिंग"],
        ),
        yoga: Lines::new(
            &["Cat-Cow Pose (Marjariasana)", "Bridge Pose (Setu Bandhasana)"],
            &["मार्जरीआसन", "सेतु बंधासन"],
        ),
        dos: Lines::new(
            &["Keep joints moving", "Maintain healthy weight", "Use warm compresses"],
            &["जोड़ों को सक्रिय रखें", "स्वस्थ वजन बनाए रखें", "गर्म सिकाई करें"],
        ),
        donts: Lines::new(
            &["Stay still for long periods", "Lift heavy loads", "Ignore persistent swelling"],
            &["लंबे समय तक एक जगह न बैठें", "भारी वजन न उठाएं", "लगातार सूजन को नज़रअंदाज़ न करें"],
        ),
        consult: Text::new(
            "Consult a doctor if a joint becomes red, hot or you cannot move it.",
            "यदि जोड़ लाल, गर्म हो जाए या हिलाना संभव न हो तो डॉक्टर से सलाह लें।",
        ),
    },
];

#[cfg(test)]
#[path = "diseases_test.rs"]
mod tests;
