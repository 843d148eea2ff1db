//! End-to-end loading of the three tables from disk.

use std::io::Write;

use recommender_ingestion::{load_all, IngestionError};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn load_all_reads_three_tables_with_their_delimiters() {
    let dir = TempDir::new().unwrap();

    let users = write_file(
        &dir,
        "users.csv",
        "user_id,age,interests\n1,30,\"fitness, running\"\n2,41,office\n",
    );
    let items = write_file(
        &dir,
        "items.csv",
        "item_id;name;category;description;keywords\n\
         1;Trail Runner;footwear;running shoes;fitness|running\n\
         2;Desk Chair;office;desk chair;office\n",
    );
    let interactions = write_file(
        &dir,
        "interactions.csv",
        "user_id,item_id,interaction_type,timestamp,rating,payment_method\n\
         1,1,purchase,2024-03-01 10:00:00,5,card\n\
         2,2,view,,,\n",
    );

    let tables = load_all(&users, &items, &interactions).unwrap();

    assert_eq!(tables.users.len(), 2);
    assert_eq!(tables.items.len(), 2);
    assert_eq!(tables.interactions.len(), 2);

    assert_eq!(tables.users[0].interests, vec!["fitness", "running"]);
    assert_eq!(tables.items[0].keywords, vec!["fitness", "running"]);
    assert_eq!(tables.interactions[1].rating, None);
}

#[test]
fn load_all_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let users = write_file(&dir, "users.csv", "user_id,interests\n1,fitness\n");
    let missing = dir.path().join("absent.csv");

    let err = load_all(&users, &missing, &missing).unwrap_err();
    assert!(matches!(err, IngestionError::Io(_)));
}
