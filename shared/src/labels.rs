//! Static display labels
//!
//! The calculator screen ships in English and Arabic. These are plain string
//! tables; there is no message catalogue or pluralisation.

use crate::errors::InputField;
use crate::models::{ActivityLevel, Goal, Sex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ar" | "arabic" => Ok(Locale::Ar),
            _ => Err(format!("Unknown locale: {}", s)),
        }
    }
}

/// Screen strings for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub title: &'static str,
    pub calculate_button: &'static str,
    pub result_heading: &'static str,
    pub calories: &'static str,
    pub protein: &'static str,
    pub fat: &'static str,
    pub carbs: &'static str,
    pub note: &'static str,
    pub invalid_number_message: &'static str,
    pub out_of_range_message: &'static str,
    pub unknown_value: &'static str,
    pub floor_applied: &'static str,
}

const EN: Labels = Labels {
    title: "Bodybuilding Calorie & Macro Calculator",
    calculate_button: "Calculate now",
    result_heading: "Daily target",
    calories: "Calories",
    protein: "Protein",
    fat: "Fat",
    carbs: "Carbs",
    note: "Protein = 2 g/kg, fat = 1 g/kg, carbs come from the remaining calories.",
    invalid_number_message: "Please enter valid numbers for age/height/weight.",
    out_of_range_message: "Check the values: age 10-80, height 120-230 cm, weight 30-200 kg.",
    unknown_value: "unknown value",
    floor_applied: "The 1200 kcal minimum was applied.",
};

const AR: Labels = Labels {
    title: "حاسبة السعرات والماكروز لكمال الأجسام",
    calculate_button: "احسب الآن",
    result_heading: "النتيجة اليومية",
    calories: "السعرات",
    protein: "البروتين",
    fat: "الدهون",
    carbs: "الكارب",
    note: "ملاحظة: البروتين = 2غ/كغ، الدهون = 1غ/كغ، والكارب يُحسب من السعرات المتبقية.",
    invalid_number_message: "رجاءً أدخل أرقام صحيحة في العمر/الطول/الوزن.",
    out_of_range_message: "تأكد من القيم: عمر 10-80، طول 120-230 سم، وزن 30-200 كغ.",
    unknown_value: "قيمة غير معروفة",
    floor_applied: "تم تطبيق الحد الأدنى 1200 سعرة.",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::En => &EN,
            Locale::Ar => &AR,
        }
    }
}

impl Sex {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Sex::Male, Locale::En) => "Male",
            (Sex::Male, Locale::Ar) => "ذكر",
            (Sex::Female, Locale::En) => "Female",
            (Sex::Female, Locale::Ar) => "أنثى",
        }
    }
}

impl ActivityLevel {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ActivityLevel::Low, Locale::En) => "Low",
            (ActivityLevel::Low, Locale::Ar) => "قليل",
            (ActivityLevel::Medium, Locale::En) => "Medium",
            (ActivityLevel::Medium, Locale::Ar) => "متوسط",
            (ActivityLevel::High, Locale::En) => "High",
            (ActivityLevel::High, Locale::Ar) => "عالي",
        }
    }
}

impl Goal {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Goal::Cut, Locale::En) => "Cut",
            (Goal::Cut, Locale::Ar) => "تنشيف",
            (Goal::Maintain, Locale::En) => "Maintain",
            (Goal::Maintain, Locale::Ar) => "ثبات",
            (Goal::Bulk, Locale::En) => "Bulk",
            (Goal::Bulk, Locale::Ar) => "تضخيم",
        }
    }
}

impl InputField {
    /// Form label of the field, units included
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (InputField::Sex, Locale::En) => "Sex",
            (InputField::Sex, Locale::Ar) => "الجنس",
            (InputField::Age, Locale::En) => "Age (years)",
            (InputField::Age, Locale::Ar) => "العمر (سنة)",
            (InputField::Height, Locale::En) => "Height (cm)",
            (InputField::Height, Locale::Ar) => "الطول (سم)",
            (InputField::Weight, Locale::En) => "Weight (kg)",
            (InputField::Weight, Locale::Ar) => "الوزن (كغ)",
            (InputField::Activity, Locale::En) => "Activity level",
            (InputField::Activity, Locale::Ar) => "مستوى النشاط",
            (InputField::Goal, Locale::En) => "Goal",
            (InputField::Goal, Locale::Ar) => "الهدف",
        }
    }
}
