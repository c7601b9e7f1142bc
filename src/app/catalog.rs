//! # Supported Crops and Diseases
//!
//! Static reference data for the `info` command: every crop the
//! recommender can return and every leaf class the disease detector knows,
//! each with a short growing or treatment note.

/// A crop the recommender can suggest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropInfo {
    pub name: &'static str,
    pub emoji: &'static str,
    pub summary: &'static str,
}

/// A leaf class the disease detector can return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiseaseInfo {
    pub name: &'static str,
    pub summary: &'static str,
}

/// Emoji used for crops missing from [`CROPS`]
pub const DEFAULT_CROP_EMOJI: &str = "🌱";

/// Crops matching `query` (case-insensitive substring), in catalog order.
pub fn search_crops(query: &str) -> Vec<&'static CropInfo> {
    let query = query.trim().to_lowercase();
    CROPS
        .iter()
        .filter(|crop| crop.name.to_lowercase().contains(&query))
        .collect()
}

/// Diseases matching `query` (case-insensitive substring), in catalog order.
pub fn search_diseases(query: &str) -> Vec<&'static DiseaseInfo> {
    let query = query.trim().to_lowercase();
    DISEASES
        .iter()
        .filter(|disease| disease.name.to_lowercase().contains(&query))
        .collect()
}

/// Look up a crop by exact name, ignoring case.
pub fn find_crop(name: &str) -> Option<&'static CropInfo> {
    CROPS.iter().find(|crop| crop.name.eq_ignore_ascii_case(name))
}

/// Emoji for a crop name, [`DEFAULT_CROP_EMOJI`] when unknown.
pub fn crop_emoji(name: &str) -> &'static str {
    find_crop(name).map_or(DEFAULT_CROP_EMOJI, |crop| crop.emoji)
}

pub const CROPS: &[CropInfo] = &[
    CropInfo {
        name: "apple",
        emoji: "🍎",
        summary: "Apples are rich in fiber and vitamin C. Keep soil moist and use drip irrigation. Protect from pests like aphids.",
    },
    CropInfo {
        name: "banana",
        emoji: "🍌",
        summary: "Bananas grow well in warm climates. Fertilize regularly and water consistently. Watch for nematodes.",
    },
    CropInfo {
        name: "blackgram",
        emoji: "🌱",
        summary: "Blackgram fixes nitrogen in soil. Requires minimal irrigation and well-drained soil. Harvest when pods turn brown.",
    },
    CropInfo {
        name: "chickpea",
        emoji: "🌿",
        summary: "Chickpeas prefer cool growing season. Ensure proper spacing and control pod borers.",
    },
    CropInfo {
        name: "coconut",
        emoji: "🥥",
        summary: "Coconuts require tropical conditions. Provide plenty of sunlight and well-drained soil. Fertilize thrice a year.",
    },
    CropInfo {
        name: "coffee",
        emoji: "☕",
        summary: "Coffee grows under partial shade. Maintain soil moisture and prune regularly. Watch for leaf rust.",
    },
    CropInfo {
        name: "cotton",
        emoji: "🌾",
        summary: "Cotton grows best in black soil. Apply fertilizers carefully and manage pests like bollworm.",
    },
    CropInfo {
        name: "grapes",
        emoji: "🍇",
        summary: "Grapes need sunny weather and good drainage. Train vines and control powdery mildew.",
    },
    CropInfo {
        name: "jute",
        emoji: "🌿",
        summary: "Jute requires warm and humid climate. Plant in well-drained alluvial soil and harvest after 120 days.",
    },
    CropInfo {
        name: "kidneybeans",
        emoji: "🫘",
        summary: "Beans need well-drained soil. Provide support for climbing varieties. Control aphids and leaf miners.",
    },
    CropInfo {
        name: "lentil",
        emoji: "🫘",
        summary: "Lentils grow best in cool, semi-arid climates. Rotate crops to prevent disease.",
    },
    CropInfo {
        name: "maize",
        emoji: "🌽",
        summary: "Maize needs full sun and fertile soil. Water evenly and control stem borers.",
    },
    CropInfo {
        name: "mango",
        emoji: "🥭",
        summary: "Mangoes require tropical/subtropical climate. Fertilize seasonally and protect from fruit flies.",
    },
    CropInfo {
        name: "mothbeans",
        emoji: "🫘",
        summary: "Mothbeans are drought-resistant. Plant in sandy soil and manage pod borers.",
    },
    CropInfo {
        name: "mungbean",
        emoji: "🫘",
        summary: "Mungbean fixes nitrogen. Requires moderate water and well-drained soil.",
    },
    CropInfo {
        name: "muskmelon",
        emoji: "🍈",
        summary: "Muskmelon grows in warm weather. Provide trellis support and water regularly.",
    },
    CropInfo {
        name: "orange",
        emoji: "🍊",
        summary: "Oranges need sunny climate and well-drained soil. Fertilize regularly and manage citrus greening.",
    },
    CropInfo {
        name: "papaya",
        emoji: "🥭",
        summary: "Papaya grows fast in tropical areas. Protect from wind and water consistently.",
    },
    CropInfo {
        name: "pigeonpeas",
        emoji: "🫘",
        summary: "Pigeonpeas fix nitrogen. Plant in well-drained soil and control pod borers.",
    },
    CropInfo {
        name: "pomegranate",
        emoji: "🍎",
        summary: "Pomegranates grow in arid areas. Prune regularly and control fruit flies.",
    },
    CropInfo {
        name: "rice",
        emoji: "🍚",
        summary: "Rice requires standing water in paddy fields. Maintain water levels and control stem borers.",
    },
    CropInfo {
        name: "watermelon",
        emoji: "🍉",
        summary: "Watermelon grows in warm soil. Provide plenty of sunlight and consistent watering.",
    },
];

pub const DISEASES: &[DiseaseInfo] = &[
    DiseaseInfo {
        name: "Apple__Apple_scab",
        summary: "Symptoms: Dark, scabby spots on leaves and fruit. Prevention: Remove infected leaves, use resistant varieties. Treatment: Fungicide sprays.",
    },
    DiseaseInfo {
        name: "Apple_Black_rot",
        summary: "Symptoms: Black spots on fruits and leaves. Prevention: Prune infected branches. Treatment: Apply fungicides regularly.",
    },
    DiseaseInfo {
        name: "Apple_Cedar_apple_rust",
        summary: "Symptoms: Yellow-orange spots on leaves. Prevention: Remove nearby cedar trees. Treatment: Fungicide applications.",
    },
    DiseaseInfo {
        name: "Apple__healthy",
        summary: "No disease detected. Plant is healthy.",
    },
    DiseaseInfo {
        name: "Blueberry___healthy",
        summary: "No disease detected. Plant is healthy.",
    },
    DiseaseInfo {
        name: "Cherry_(including_sour)Powdery_mildew",
        summary: "Symptoms: White powdery coating on leaves and stems. Prevention: Proper spacing and air circulation. Treatment: Sulfur-based sprays.",
    },
    DiseaseInfo {
        name: "Cherry(including_sour)_healthy",
        summary: "No disease detected. Plant is healthy.",
    },
    DiseaseInfo {
        name: "Corn_(maize)Cercospora_leaf_spot Gray_leaf_spot",
        summary: "Symptoms: Grayish spots on leaves. Prevention: Crop rotation. Treatment: Fungicide sprays.",
    },
    DiseaseInfo {
        name: "Corn(maize)Common_rust",
        summary: "Symptoms: Orange-red pustules on leaves. Prevention: Resistant varieties. Treatment: Fungicides.",
    },
    DiseaseInfo {
        name: "Corn_(maize)Northern_Leaf_Blight",
        summary: "Symptoms: Large gray-green lesions on leaves. Prevention: Crop rotation and resistant varieties. Treatment: Fungicides.",
    },
    DiseaseInfo {
        name: "Corn(maize)_healthy",
        summary: "No disease detected. Plant is healthy.",
    },
    DiseaseInfo {
        name: "Grape__Black_rot",
        summary: "Symptoms: Black spots on leaves and fruits. Prevention: Prune and destroy infected tissue. Treatment: Fungicides.",
    },
    DiseaseInfo {
        name: "Grape_Esca(Black_Measles)",
        summary: "Symptoms: Brown or black streaks on wood. Prevention: Remove infected wood. Treatment: Fungicide treatments.",
    },
    DiseaseInfo {
        name: "Grape__Leaf_blight(Isariopsis_Leaf_Spot)",
        summary: "Symptoms: Spots on leaves that expand and merge. Prevention: Proper spacing and pruning. Treatment: Fungicides.",
    },
    DiseaseInfo {
        name: "Grape___healthy",
        summary: "No disease detected. Plant is healthy.",
    },
    DiseaseInfo {
        name: "Orange__Haunglongbing(Citrus_greening)",
        summary: "Symptoms: Yellow shoots, misshapen fruits. Prevention: Use disease-free seedlings. Treatment: Remove infected plants.",
    },
    DiseaseInfo {
        name: "Peach__Bacterial_spot",
        summary: "Symptoms: Dark, water-soaked spots on leaves and fruits. Prevention: Copper sprays. Treatment: Apply recommended bactericides.",
    },
    DiseaseInfo {
        name: "Peach__healthy",
        summary: "No disease detected. Plant is healthy.",
    },
    DiseaseInfo {
        name: "Pepper,bell_Bacterial_spot",
        summary: "Symptoms: Water-soaked spots on leaves and fruits. Prevention: Copper sprays. Treatment: Bactericides.",
    },
    DiseaseInfo {
        name: "Pepper,_bell__healthy",
        summary: "No disease detected. Plant is healthy.",
    },
    DiseaseInfo {
        name: "Potato__Early_blight",
        summary: "Symptoms: Brown lesions on leaves and stems. Prevention: Rotate crops. Treatment: Fungicide sprays.",
    },
    DiseaseInfo {
        name: "Potato_Late_blight",
        summary: "Symptoms: Dark lesions on leaves and tubers. Prevention: Resistant varieties. Treatment: Fungicides immediately.",
    },
    DiseaseInfo {
        name: "Potato__healthy",
        summary: "No disease detected. Plant is healthy.",
    },
    DiseaseInfo {
        name: "Raspberry___healthy",
        summary: "No disease detected. Plant is healthy.",
    },
    DiseaseInfo {
        name: "Soybean___healthy",
        summary: "No disease detected. Plant is healthy.",
    },
    DiseaseInfo {
        name: "Squash___Powdery_mildew",
        summary: "Symptoms: White powdery coating on leaves. Prevention: Proper spacing and air circulation. Treatment: Fungicides.",
    },
    DiseaseInfo {
        name: "Strawberry__Leaf_scorch",
        summary: "Symptoms: Brown edges on leaves. Prevention: Avoid overhead watering. Treatment: Fungicides.",
    },
    DiseaseInfo {
        name: "Strawberry__healthy",
        summary: "No disease detected. Plant is healthy.",
    },
    DiseaseInfo {
        name: "Tomato__Bacterial_spot",
        summary: "Symptoms: Small brown spots on leaves. Prevention: Copper sprays. Treatment: Bactericides.",
    },
    DiseaseInfo {
        name: "Tomato_Early_blight",
        summary: "Symptoms: Dark lesions on lower leaves. Prevention: Crop rotation. Treatment: Fungicide sprays.",
    },
    DiseaseInfo {
        name: "Tomato__Late_blight",
        summary: "Symptoms: Water-soaked lesions on leaves. Prevention: Resistant varieties. Treatment: Fungicides.",
    },
    DiseaseInfo {
        name: "Tomato__Leaf_Mold",
        summary: "Symptoms: Yellow spots turning brown. Prevention: Good air circulation. Treatment: Fungicides.",
    },
    DiseaseInfo {
        name: "Tomato__Septoria_leaf_spot",
        summary: "Symptoms: Small circular spots on leaves. Prevention: Avoid wet foliage. Treatment: Fungicides.",
    },
    DiseaseInfo {
        name: "Tomato__Spider_mites Two-spotted_spider_mite",
        summary: "Symptoms: Yellow speckling on leaves. Prevention: Regular monitoring. Treatment: Miticides.",
    },
    DiseaseInfo {
        name: "Tomato__Target_Spot",
        summary: "Symptoms: Dark brown target-shaped spots. Prevention: Crop rotation. Treatment: Fungicides.",
    },
    DiseaseInfo {
        name: "Tomato__Tomato_Yellow_Leaf_Curl_Virus",
        summary: "Symptoms: Yellow curling leaves. Prevention: Control whiteflies. Treatment: Remove infected plants.",
    },
    DiseaseInfo {
        name: "Tomato_Tomato_mosaic_virus",
        summary: "Symptoms: Mottled leaves. Prevention: Use virus-free seeds. Treatment: Remove infected plants.",
    },
    DiseaseInfo {
        name: "Tomato__healthy",
        summary: "No disease detected. Plant is healthy.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(CROPS.len(), 22);
        assert_eq!(DISEASES.len(), 38);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(search_crops("").len(), CROPS.len());
        assert_eq!(search_diseases("  ").len(), DISEASES.len());
    }

    #[test]
    fn test_search_crops_case_insensitive() {
        let names: Vec<_> = search_crops("MA").iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["maize", "mango"]);
    }

    #[test]
    fn test_search_diseases() {
        let results = search_diseases("late_blight");
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|d| d.name.to_lowercase().contains("late_blight")));

        assert!(search_diseases("banana").is_empty());
    }

    #[test]
    fn test_crop_emoji() {
        assert_eq!(crop_emoji("rice"), "🍚");
        assert_eq!(crop_emoji("Maize"), "🌽");
        assert_eq!(crop_emoji("quinoa"), DEFAULT_CROP_EMOJI);
    }
}
