use crate::domain::model::{Record, Sex, Statistics};

pub fn aggregate(records: &[Record]) -> Statistics {
    let (male_count, male_average_age) = count_and_average(records, Sex::Male);
    let (female_count, female_average_age) = count_and_average(records, Sex::Female);

    Statistics {
        male_count,
        female_count,
        male_average_age,
        female_average_age,
    }
}

// Empty subsets average to 0.0.
fn count_and_average(records: &[Record], sex: Sex) -> (usize, f64) {
    let (count, sum) = records
        .iter()
        .filter(|r| r.sex == sex)
        .fold((0usize, 0i64), |(count, sum), r| (count + 1, sum + i64::from(r.age)));

    if count == 0 {
        (0, 0.0)
    } else {
        (count, sum as f64 / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(sex: Sex, age: i32) -> Record {
        Record {
            first_name: "Test".to_string(),
            last_name: "Person".to_string(),
            email: "test@example.com".to_string(),
            sex,
            access_ip: "127.0.0.1".to_string(),
            age,
            birth_date: None,
        }
    }

    #[test]
    fn test_empty_input() {
        let stats = aggregate(&[]);
        assert_eq!(stats.male_count, 0);
        assert_eq!(stats.female_count, 0);
        assert_eq!(stats.male_average_age, 0.0);
        assert_eq!(stats.female_average_age, 0.0);
        assert!(!stats.male_average_age.is_nan());
    }

    #[test]
    fn test_counts_and_averages() {
        let records = vec![
            person(Sex::Male, 20),
            person(Sex::Male, 30),
            person(Sex::Female, 40),
        ];

        let stats = aggregate(&records);

        assert_eq!(stats.male_count, 2);
        assert_eq!(stats.female_count, 1);
        assert_eq!(stats.male_average_age, 25.0);
        assert_eq!(stats.female_average_age, 40.0);
        assert_eq!(stats.total(), records.len());
    }

    #[test]
    fn test_one_sided_input_keeps_zero_average() {
        let stats = aggregate(&[person(Sex::Female, 21), person(Sex::Female, 22)]);
        assert_eq!(stats.male_count, 0);
        assert_eq!(stats.male_average_age, 0.0);
        assert_eq!(stats.female_average_age, 21.5);
    }

    #[test]
    fn test_large_ages_do_not_overflow() {
        let stats = aggregate(&[person(Sex::Male, i32::MAX), person(Sex::Male, i32::MAX)]);
        assert_eq!(stats.male_average_age, i32::MAX as f64);
    }
}
