use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column names of the person file, in file order.
pub const HEADER_COLUMNS: [&str; 7] = [
    "Nome",
    "SobreNome",
    "Email",
    "Sexo",
    "IpAcesso",
    "Idade",
    "Nascimento",
];

/// Header line every uploaded file must start with (after normalization).
pub const EXPECTED_HEADER: &str = "Nome,SobreNome,Email,Sexo,IpAcesso,Idade,Nascimento";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "MALE",
            Sex::Female => "FEMALE",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSex(pub String);

impl FromStr for Sex {
    type Err = UnknownSex;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MALE" => Ok(Sex::Male),
            "FEMALE" => Ok(Sex::Female),
            _ => Err(UnknownSex(s.to_string())),
        }
    }
}

/// One validated person entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub sex: Sex,
    pub access_ip: String,
    pub age: i32,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub male_count: usize,
    pub female_count: usize,
    pub male_average_age: f64,
    pub female_average_age: f64,
}

impl Statistics {
    pub fn total(&self) -> usize {
        self.male_count + self.female_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_str_ignores_case() {
        assert_eq!("male".parse::<Sex>(), Ok(Sex::Male));
        assert_eq!("Female".parse::<Sex>(), Ok(Sex::Female));
        assert_eq!("FEMALE".parse::<Sex>(), Ok(Sex::Female));
        assert_eq!("other".parse::<Sex>(), Err(UnknownSex("other".to_string())));
        assert!("".parse::<Sex>().is_err());
    }

    #[test]
    fn test_sex_serializes_as_symbolic_name() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"MALE\"");
        assert_eq!(
            serde_json::from_str::<Sex>("\"FEMALE\"").unwrap(),
            Sex::Female
        );
    }

    #[test]
    fn test_header_columns_match_expected_header() {
        assert_eq!(HEADER_COLUMNS.join(","), EXPECTED_HEADER);
    }
}
