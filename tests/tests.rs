use sqlx_util::prelude::*;

async fn setup_database(name: &str) -> Database {
    Database::new(&format!("sqlite:file:{name}?mode=memory&cache=shared"))
        .await
        .expect("failed to init database")
}

#[derive(FromRow, IntoRow, Clone, Debug, PartialEq)]
struct Example {
    id: i64,
    name: String,
}

#[derive(IntoRow)]
struct Renamed {
    #[field(rename = "id")]
    key: i64,
    name: String,
    #[field(skip = true)]
    #[allow(dead_code)]
    dirty: bool,
}

/// Recreates `example_table` and fills it one row at a time.
async fn init_table(database: &Database, ids: std::ops::Range<i64>) -> anyhow::Result<()> {
    database
        .execute("DROP TABLE IF EXISTS example_table;", vec![])
        .await?;
    database
        .execute(
            "CREATE TABLE example_table (id INTEGER, name TEXT NOT NULL);",
            vec![],
        )
        .await?;

    for i in ids {
        database
            .execute(
                "INSERT INTO example_table (id, name) VALUES (?, ?);",
                args![i, format!("name{i}")],
            )
            .await?;
    }
    Ok(())
}

async fn get(database: &Database, query: &str, args: Vec<Value>) -> Example {
    database
        .fetch_all::<Example>(query, args)
        .await
        .unwrap()
        .into_iter()
        .next()
        .expect("row not found")
}

async fn all(database: &Database) -> Vec<Example> {
    database
        .fetch_all("SELECT id, name FROM example_table ORDER BY id", vec![])
        .await
        .unwrap()
}

async fn count(database: &Database) -> i64 {
    let rows: Vec<(i64,)> = database
        .fetch_all("SELECT COUNT(*) FROM example_table", vec![])
        .await
        .unwrap();
    rows[0].0
}

#[tokio::test]
async fn test_select_in() {
    let database = setup_database("select_in").await;
    let r = init_table(&database, 1..11).await;
    assert!(r.is_ok(), "{:?}", r);

    let mut expected = Vec::new();
    for id in [2, 4, 6] {
        expected.push(get(&database, "SELECT id, name FROM example_table WHERE id = ?", args![id]).await);
    }

    let results: Vec<Example> = select_in(
        &database,
        "SELECT id, name FROM example_table WHERE id IN (?)",
        in_args![vec![2, 4, 6]],
    )
    .await
    .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results, expected);
}

#[tokio::test]
async fn test_select_in_with_empty_list() {
    let database = setup_database("select_in_empty").await;
    init_table(&database, 1..11).await.unwrap();

    let result: Result<Vec<Example>> = select_in(
        &database,
        "SELECT id, name FROM example_table WHERE id IN (?)",
        in_args![Vec::<i64>::new()],
    )
    .await;

    assert!(result.unwrap_err().is_expansion());
}

#[tokio::test]
async fn test_select_in_composite_keys() {
    let database = setup_database("select_in_tuples").await;
    init_table(&database, 1..11).await.unwrap();

    let results: Vec<Example> = select_in(
        &database,
        "SELECT id, name FROM example_table WHERE (id, name) IN (VALUES ?) ORDER BY id",
        vec![Arg::tuples([args![3, "name3"], args![5, "name5"], args![5, "name6"]])],
    )
    .await
    .unwrap();

    let ids: Vec<i64> = results.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 5]);
}

#[tokio::test]
async fn test_select_in_paired() {
    let database = setup_database("select_in_paired").await;
    init_table(&database, 1..11).await.unwrap();

    let mut expected = Vec::new();
    for (id, name) in [(2, "name2"), (4, "name4"), (6, "name6")] {
        expected.push(
            get(
                &database,
                "SELECT id, name FROM example_table WHERE id = ? AND name = ?",
                args![id, name],
            )
            .await,
        );
    }

    let results: Vec<Example> = select_in_paired(
        &database,
        "SELECT id, name FROM example_table",
        "(id = ? AND name = ?)",
        vec![args![2, "name2"], args![4, "name4"], args![6, "name6"]],
    )
    .await
    .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results, expected);
}

#[tokio::test]
async fn test_select_in_paired_with_custom_args() {
    let database = setup_database("select_in_paired_custom").await;
    init_table(&database, 1..11).await.unwrap();

    // the custom argument filters out id 4
    let results: Vec<Example> = select_in_paired_with_custom_args(
        &database,
        "SELECT id, name FROM example_table JOIN (SELECT ? AS excluded_id) AS x ON id <> x.excluded_id",
        "(id = ? AND name = ?)",
        args![4],
        vec![args![2, "name2"], args![4, "name4"], args![6, "wrong"]],
    )
    .await
    .unwrap();

    assert_eq!(
        results,
        vec![Example {
            id: 2,
            name: "name2".into()
        }]
    );
}

#[tokio::test]
async fn test_select_in_paired_without_tuples() {
    let database = setup_database("select_in_paired_empty").await;

    // no table exists, so running anything would fail
    let results: Vec<Example> = select_in_paired(
        &database,
        "SELECT id, name FROM example_table",
        "(id = ? AND name = ?)",
        vec![],
    )
    .await
    .unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_bulk_insert() {
    let database = setup_database("bulk_insert").await;

    init_table(&database, 0..100).await.unwrap();
    for i in 200..300_i64 {
        database
            .execute(
                "INSERT INTO example_table (id, name) VALUES (?, ?);",
                args![i, format!("name{i}")],
            )
            .await
            .unwrap();
    }
    let results = all(&database).await;

    init_table(&database, 0..100).await.unwrap();
    let values = (200..300_i64).map(|i| args![i, format!("name{i}")]).collect();
    let r = bulk_insert(&database, "INSERT INTO example_table (id, name)", values).await;
    assert!(r.is_ok(), "{:?}", r);
    assert_eq!(r.unwrap().rows_affected, 100);

    let results2 = all(&database).await;
    assert_eq!(results.len(), results2.len());
    assert_eq!(results, results2);
}

#[tokio::test]
async fn test_bulk_insert_rejects_ragged_rows() {
    let database = setup_database("bulk_insert_ragged").await;
    init_table(&database, 0..10).await.unwrap();

    let r = bulk_insert(
        &database,
        "INSERT INTO example_table (id, name)",
        vec![args![100, "name100"], args![101, "name101"], args![102]],
    )
    .await;

    assert!(r.unwrap_err().is_arity_mismatch());
    assert_eq!(count(&database).await, 10);
}

#[tokio::test]
async fn test_bulk_insert_without_rows() {
    let database = setup_database("bulk_insert_empty").await;

    // no table exists, so running anything would fail
    let r = bulk_insert(&database, "INSERT INTO example_table (id, name)", vec![]).await;
    assert_eq!(r.unwrap(), ExecResult::default());
}

#[tokio::test]
async fn test_bulk_insert_wide_rows() {
    let database = setup_database("bulk_insert_wide").await;
    let columns: Vec<String> = (0..12).map(|c| format!("c{c}")).collect();
    database
        .execute(
            &format!("CREATE TABLE wide ({} INTEGER)", columns.join(" INTEGER, ")),
            vec![],
        )
        .await
        .unwrap();

    let values = (0..5_i64)
        .map(|row| (0..12_i64).map(|c| Value::from(row * 100 + c)).collect())
        .collect();
    let r = bulk_insert(
        &database,
        &format!("INSERT INTO wide ({})", columns.join(", ")),
        values,
    )
    .await
    .unwrap();
    assert_eq!(r.rows_affected, 5);

    let rows: Vec<(i64, i64)> = database
        .fetch_all("SELECT c0, c11 FROM wide ORDER BY c0", vec![])
        .await
        .unwrap();
    assert_eq!(rows, vec![(0, 11), (100, 111), (200, 211), (300, 311), (400, 411)]);
}

#[tokio::test]
async fn test_bulk_insert_records() {
    let database = setup_database("bulk_insert_records").await;
    init_table(&database, 0..0).await.unwrap();

    assert_eq!(<Example as IntoRow>::COLUMNS, &["id", "name"]);
    assert_eq!(<Renamed as IntoRow>::COLUMNS, &["id", "name"]);

    let examples: Vec<Example> = (1..=3)
        .map(|id| Example {
            id,
            name: format!("name{id}"),
        })
        .collect();
    bulk_insert_records(&database, "example_table", &examples)
        .await
        .unwrap();

    let renamed = [Renamed {
        key: 4,
        name: "name4".into(),
        dirty: true,
    }];
    bulk_insert_records(&database, "example_table", &renamed)
        .await
        .unwrap();

    let results = all(&database).await;
    assert_eq!(results.len(), 4);
    assert_eq!(&results[..3], examples.as_slice());
    assert_eq!(results[3].name, "name4");
}
