//! Column names and the typed record every CSV row is validated into

use std::fmt;
use std::str::FromStr;

pub const HEART_DISEASE: &str = "HeartDisease";
pub const SEX: &str = "Sex";
pub const AGE_CATEGORY: &str = "AgeCategory";
pub const BMI: &str = "BMI";
pub const PHYSICAL_HEALTH: &str = "PhysicalHealth";
pub const MENTAL_HEALTH: &str = "MentalHealth";
pub const SLEEP_TIME: &str = "SleepTime";
pub const SMOKING: &str = "Smoking";
pub const ALCOHOL_DRINKING: &str = "AlcoholDrinking";

/// Synthetic column added to the normalized frame so filtered rows can be
/// mapped back to their records
pub const ROW_ID: &str = "__row_id";

/// Every column the dashboard needs, in CSV order
pub const REQUIRED_COLUMNS: [&str; 9] = [
    HEART_DISEASE,
    BMI,
    SMOKING,
    ALCOHOL_DRINKING,
    PHYSICAL_HEALTH,
    MENTAL_HEALTH,
    SEX,
    AGE_CATEGORY,
    SLEEP_TIME,
];

/// A fixed-set categorical column value
pub trait Category: Copy + Ord {
    fn label(self) -> &'static str;
}

/// Answer of a yes/no survey question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

impl FromStr for YesNo {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Yes" => Ok(YesNo::Yes),
            "No" => Ok(YesNo::No),
            _ => Err(()),
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl FromStr for Sex {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Male" => Ok(Sex::Male),
            "Female" => Ok(Sex::Female),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age bracket; the derived ordering is the canonical display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeCategory {
    From18To24,
    From25To29,
    From30To34,
    From35To39,
    From40To44,
    From45To49,
    From50To54,
    From55To59,
    From60To64,
    From65To69,
    From70To74,
    From75To79,
    From80,
}

impl AgeCategory {
    /// All brackets in canonical (ascending) order
    pub const ALL: [AgeCategory; 13] = [
        AgeCategory::From18To24,
        AgeCategory::From25To29,
        AgeCategory::From30To34,
        AgeCategory::From35To39,
        AgeCategory::From40To44,
        AgeCategory::From45To49,
        AgeCategory::From50To54,
        AgeCategory::From55To59,
        AgeCategory::From60To64,
        AgeCategory::From65To69,
        AgeCategory::From70To74,
        AgeCategory::From75To79,
        AgeCategory::From80,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeCategory::From18To24 => "18-24",
            AgeCategory::From25To29 => "25-29",
            AgeCategory::From30To34 => "30-34",
            AgeCategory::From35To39 => "35-39",
            AgeCategory::From40To44 => "40-44",
            AgeCategory::From45To49 => "45-49",
            AgeCategory::From50To54 => "50-54",
            AgeCategory::From55To59 => "55-59",
            AgeCategory::From60To64 => "60-64",
            AgeCategory::From65To69 => "65-69",
            AgeCategory::From70To74 => "70-74",
            AgeCategory::From75To79 => "75-79",
            AgeCategory::From80 => "80 or older",
        }
    }

    /// Position in the canonical order
    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for AgeCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AgeCategory::ALL
            .into_iter()
            .find(|age| age.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Category for YesNo {
    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl Category for Sex {
    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl Category for AgeCategory {
    fn label(self) -> &'static str {
        self.as_str()
    }
}

/// One validated survey respondent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Respondent {
    pub heart_disease: YesNo,
    pub sex: Sex,
    pub age_category: AgeCategory,
    pub bmi: f64,
    pub physical_health: f64,
    pub mental_health: f64,
    pub sleep_time: f64,
    pub smoking: YesNo,
    pub alcohol_drinking: YesNo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_canonical_order() {
        let labels: Vec<&str> = AgeCategory::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(labels.first(), Some(&"18-24"));
        assert_eq!(labels.last(), Some(&"80 or older"));

        let mut sorted = AgeCategory::ALL.to_vec();
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, AgeCategory::ALL.to_vec());

        for (i, age) in AgeCategory::ALL.iter().enumerate() {
            assert_eq!(age.index(), i);
        }
    }

    #[test]
    fn test_parse_categories() {
        assert_eq!("80 or older".parse::<AgeCategory>(), Ok(AgeCategory::From80));
        assert_eq!(" 45-49 ".parse::<AgeCategory>(), Ok(AgeCategory::From45To49));
        assert!("90+".parse::<AgeCategory>().is_err());

        assert_eq!("Female".parse::<Sex>(), Ok(Sex::Female));
        assert!("female".parse::<Sex>().is_err());

        assert_eq!("Yes".parse::<YesNo>(), Ok(YesNo::Yes));
        assert!("Maybe".parse::<YesNo>().is_err());
    }
}
