use anyhow::Result;
use chrono::NaiveDate;
use people_etl::core::RecordStore;
use people_etl::{
    export_csv, process, sort_by_name, EtlEngine, EtlError, FixedClock, JsonFileRecordStore, LocalStorage,
    Sex, UploadSource,
};
use tempfile::TempDir;

const PEOPLE_CSV: &str = "Nome,SobreNome,Email,Sexo,IpAcesso,Idade,Nascimento
Mariana,Costa,mariana@example.com,FEMALE,192.168.0.10,29,12/3/1995
carlos,Pereira,carlos@example.com,male,10.1.1.1,45,30/11/0000
Ana,Souza,ana@example.com,Female,172.16.0.4,30,20/7/0000
Bruno,Lima,bruno@example.com,MALE,10.0.0.8,38,1/1/0000
";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn upload(text: &str) -> UploadSource {
    UploadSource::new(text, Some("people.csv"), Some("text/csv"))
}

#[test]
fn test_parse_export_parse_round_trip() -> Result<()> {
    let first = process(&upload(PEOPLE_CSV), today())?;
    let exported = export_csv(&first)?;
    let second = process(&upload(&exported), today())?;

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_birth_dates_are_inferred_from_age() -> Result<()> {
    let records = process(&upload(PEOPLE_CSV), today())?;

    let birth = |name: &str| {
        records
            .iter()
            .find(|r| r.first_name == name)
            .and_then(|r| r.birth_date)
    };

    // 12/3 already passed in 2024: 2024 - 29
    assert_eq!(birth("Mariana"), NaiveDate::from_ymd_opt(1995, 3, 12));
    // 30/11 still ahead: 2024 - 45 - 1
    assert_eq!(birth("carlos"), NaiveDate::from_ymd_opt(1978, 11, 30));
    assert_eq!(birth("Ana"), NaiveDate::from_ymd_opt(1993, 7, 20));
    assert_eq!(birth("Bruno"), NaiveDate::from_ymd_opt(1986, 1, 1));
    Ok(())
}

#[test]
fn test_sorted_output_is_stable_across_runs() -> Result<()> {
    let mut records = process(&upload(PEOPLE_CSV), today())?;
    sort_by_name(&mut records);

    let names: Vec<&str> = records.iter().map(|r| r.first_name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Bruno", "carlos", "Mariana"]);
    assert_eq!(records[2].sex, Sex::Male);
    Ok(())
}

#[test]
fn test_invalid_sex_aborts_whole_file() {
    let text = format!("{}Zoe,Reis,zoe@example.com,other,10.0.0.9,22,2/2/0000\n", PEOPLE_CSV);

    match process(&upload(&text), today()) {
        Err(EtlError::InvalidLine { line, reason }) => {
            assert_eq!(line, 6);
            assert!(reason.contains("other"));
        }
        other => panic!("expected InvalidLine, got {:?}", other),
    }
}

#[test]
fn test_header_without_email_is_rejected() {
    let text = "Nome,SobreNome,Sexo,IpAcesso,Idade,Nascimento\nAna,Souza,FEMALE,::1,30,1/1/0000\n";
    assert!(matches!(
        process(&upload(text), today()),
        Err(EtlError::InvalidFormat { .. })
    ));
}

#[tokio::test]
async fn test_end_to_end_with_json_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = JsonFileRecordStore::new(LocalStorage::new(temp_dir.path()));
    let engine = EtlEngine::new(store, FixedClock(today()));

    let summary = engine.import(&upload(PEOPLE_CSV)).await?;
    assert_eq!(summary.statistics.male_count, 2);
    assert_eq!(summary.statistics.female_count, 2);
    assert_eq!(summary.statistics.male_average_age, 41.5);
    assert_eq!(summary.statistics.female_average_age, 29.5);

    // A second engine over the same directory sees the persisted set.
    let reopened = EtlEngine::new(
        JsonFileRecordStore::new(LocalStorage::new(temp_dir.path())),
        FixedClock(today()),
    );
    let report = reopened.report().await?;
    assert_eq!(report.records, summary.records);
    assert_eq!(report.male_average_display(), "41.5");

    let exported = reopened.export().await?;
    assert!(exported.starts_with("Nome,SobreNome,Email,Sexo,IpAcesso,Idade,Nascimento\n"));
    assert!(exported.contains("Ana,Souza,ana@example.com,FEMALE,172.16.0.4,30,20/7/1993\n"));
    Ok(())
}

#[tokio::test]
async fn test_reimport_replaces_previous_records() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = JsonFileRecordStore::new(LocalStorage::new(temp_dir.path()));
    let engine = EtlEngine::new(store, FixedClock(today()));

    engine.import(&upload(PEOPLE_CSV)).await?;
    engine
        .import(&upload(
            "Nome,SobreNome,Email,Sexo,IpAcesso,Idade,Nascimento\nZoe,Reis,zoe@example.com,FEMALE,::1,22,2/2/0000\n",
        ))
        .await?;

    let stored = engine.store().find_all().await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].first_name, "Zoe");
    Ok(())
}

#[tokio::test]
async fn test_rejected_upload_keeps_previous_records() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = JsonFileRecordStore::new(LocalStorage::new(temp_dir.path()));
    let engine = EtlEngine::new(store, FixedClock(today()));
    engine.import(&upload(PEOPLE_CSV)).await?;

    let wrong_type = UploadSource::new(PEOPLE_CSV, Some("people.csv"), Some("text/plain"));
    assert!(matches!(
        engine.import(&wrong_type).await,
        Err(EtlError::InvalidFormat { .. })
    ));

    assert_eq!(engine.store().find_all().await?.len(), 4);
    Ok(())
}
