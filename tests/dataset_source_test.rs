use anyhow::Result;
use colcompare::{
    compare, CityDataset, CityRecord, CompareError, ComparisonInput, ComparisonSession,
    DatasetSource, FileDataset, HousingTenure, OutputFormat, ReportSink,
};
use std::sync::Arc;
use tempfile::TempDir;

/// 自訂資料集可以新增城市而不需修改計算邏輯
#[test]
fn test_custom_toml_dataset_adds_city() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("cities.toml");
    std::fs::write(
        &path,
        r#"
[dataset]
name = "custom"

[[cities]]
id = "chicago"
display_name = "Chicago, IL"
cost_index = 107.0
housing_index = 115.0
utilities_index = 98.0
transport_index = 112.0
groceries_index = 103.0

[[cities]]
id = "boise"
display_name = "Boise, ID"
cost_index = 95.0
housing_index = 101.0
utilities_index = 89.0
transport_index = 97.0
groceries_index = 96.0
"#,
    )?;

    let dataset = FileDataset::new(&path).load()?;
    let result = compare(
        &dataset,
        &ComparisonInput::new("chicago", "boise", 75_000.0, HousingTenure::Renting),
    )?;

    assert_eq!(result.required_salary, 66589);
    assert_eq!(result.display_percent(), -11.2);
    Ok(())
}

#[test]
fn test_csv_dataset_from_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("cities.csv");
    std::fs::write(
        &path,
        "id,display_name,cost_index,housing_index,utilities_index,transport_index,groceries_index\n\
         chicago,\"Chicago, IL\",107,115,98,112,103\n\
         austin,\"Austin, TX\",103,109,96,99,94\n",
    )?;

    let dataset = FileDataset::new(&path).load()?;
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.resolve("chicago")?.display_name, "Chicago, IL");
    Ok(())
}

#[test]
fn test_file_with_zero_index_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bad.csv");
    std::fs::write(
        &path,
        "id,display_name,cost_index,housing_index,utilities_index,transport_index,groceries_index\n\
         nowhere,Nowhere,0,100,100,100,100\n",
    )?;

    let err = FileDataset::new(&path).load().unwrap_err();
    assert!(matches!(err, CompareError::DatasetIntegrity { .. }));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = FileDataset::new("/definitely/not/here/cities.toml")
        .load()
        .unwrap_err();
    assert!(matches!(err, CompareError::Io(_)));
}

#[test]
fn test_duplicate_city_in_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("dup.csv");
    std::fs::write(
        &path,
        "id,display_name,cost_index,housing_index,utilities_index,transport_index,groceries_index\n\
         austin,Austin,103,109,96,99,94\n\
         austin,Austin again,103,109,96,99,94\n",
    )?;

    let err = FileDataset::new(&path).load().unwrap_err();
    assert!(matches!(err, CompareError::DuplicateCity { ref id } if id == "austin"));
    Ok(())
}

#[test]
fn test_unvalidated_dataset_still_fails_fast_in_engine() -> Result<()> {
    let record = |id: &str, cost_index: f64| CityRecord {
        id: id.to_string(),
        display_name: id.to_string(),
        cost_index,
        housing_index: 100.0,
        utilities_index: 100.0,
        transport_index: 100.0,
        groceries_index: 100.0,
    };
    let dataset = CityDataset::new(vec![record("zero", 0.0), record("one", 100.0)])?;

    let err = compare(
        &dataset,
        &ComparisonInput::new("zero", "one", 50_000.0, HousingTenure::Renting),
    )
    .unwrap_err();
    assert!(matches!(err, CompareError::DatasetIntegrity { ref city, .. } if city == "zero"));
    Ok(())
}

#[test]
fn test_session_renders_json_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("cities.toml");
    std::fs::write(
        &path,
        r#"
[[cities]]
id = "chicago"
display_name = "Chicago, IL"
cost_index = 107.0
housing_index = 115.0
utilities_index = 98.0
transport_index = 112.0
groceries_index = 103.0

[[cities]]
id = "austin"
display_name = "Austin, TX"
cost_index = 103.0
housing_index = 109.0
utilities_index = 96.0
transport_index = 99.0
groceries_index = 94.0
"#,
    )?;

    let dataset = Arc::new(FileDataset::new(&path).load()?);
    let sink = ReportSink::new(Arc::clone(&dataset), OutputFormat::Json, Vec::new());
    let input = ComparisonInput::new("chicago", "austin", 75_000.0, HousingTenure::Owning);
    let session = ComparisonSession::new(dataset, input, sink);

    let output = String::from_utf8(session.into_sink().into_inner())?;
    let report: serde_json::Value = serde_json::from_str(output.trim())?;
    assert_eq!(report["destination"]["id"], "austin");
    assert_eq!(report["housing_tenure"], "owning");
    assert_eq!(report["result"]["salary_adjustment"], -2804);
    assert_eq!(report["result"]["is_more_expensive"], false);
    Ok(())
}
