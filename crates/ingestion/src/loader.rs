//! Delimited-table loaders.
//!
//! Each loader reads one table into its in-memory model. The item table uses
//! a semicolon delimiter while users and interactions use commas; a missing
//! identifier column is fatal, every other irregularity is normalized away.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use recommender_core::{CatalogItem, Interaction, User};
use tracing::info;

use crate::normalize::{
    normalize_label, parse_number, parse_timestamp, split_interests, split_keywords,
};
use crate::{IngestionError, Result};

/// The three in-memory tables consumed by the scoring engine.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub users: Vec<User>,
    pub items: Vec<CatalogItem>,
    pub interactions: Vec<Interaction>,
}

/// Case-insensitive column lookup over a parsed header row.
struct Columns {
    table: &'static str,
    header: StringRecord,
}

impl Columns {
    fn new(table: &'static str, header: StringRecord) -> Self {
        Self { table, header }
    }

    fn index(&self, name: &str) -> Option<usize> {
        self.header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    }

    fn required(&self, name: &'static str) -> Result<usize> {
        self.index(name).ok_or(IngestionError::MissingColumn {
            table: self.table,
            column: name,
        })
    }
}

/// Fetch a field by optional column index; absent columns and short records
/// read as empty.
fn field<'r>(record: &'r StringRecord, idx: Option<usize>) -> &'r str {
    idx.and_then(|i| record.get(i)).unwrap_or("")
}

/// Load the user table from any reader (comma-delimited).
pub fn load_users_from<R: Read>(reader: R) -> Result<Vec<User>> {
    let mut csv = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::new("user", csv.headers()?.clone());

    let id_col = columns.required("user_id")?;
    let interests = columns.index("interests");
    let age = columns.index("age");
    let gender = columns.index("gender");
    let income_level = columns.index("income_level");
    let education_level = columns.index("education_level");
    let subscription_tier = columns.index("subscription_tier");
    let customer_segment = columns.index("customer_segment");
    let location = columns.index("location");
    let device = columns.index("device");
    let login_frequency = columns.index("login_frequency");

    let mut users = Vec::new();
    for record in csv.records() {
        let record = record?;
        // A row whose key does not parse carries no usable signal.
        let Some(id) = parse_number::<u64>(field(&record, Some(id_col))) else {
            continue;
        };

        users.push(User {
            id,
            interests: split_interests(field(&record, interests)),
            age: parse_number(field(&record, age)),
            gender: normalize_label(field(&record, gender)),
            income_level: normalize_label(field(&record, income_level)),
            education_level: normalize_label(field(&record, education_level)),
            subscription_tier: normalize_label(field(&record, subscription_tier)),
            customer_segment: normalize_label(field(&record, customer_segment)),
            location: normalize_label(field(&record, location)),
            device: normalize_label(field(&record, device)),
            login_frequency: normalize_label(field(&record, login_frequency)),
        });
    }

    Ok(users)
}

/// Load the item table from any reader (semicolon-delimited).
pub fn load_items_from<R: Read>(reader: R) -> Result<Vec<CatalogItem>> {
    let mut csv = ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(reader);
    let columns = Columns::new("item", csv.headers()?.clone());

    let id_col = columns.required("item_id")?;
    let name = columns.index("name");
    let category = columns.index("category");
    let description = columns.index("description");
    let keywords = columns.index("keywords");
    let price = columns.index("price");
    let avg_rating = columns.index("avg_rating");
    let discount = columns.index("discount");
    let stock = columns.index("stock");

    let mut items = Vec::new();
    for record in csv.records() {
        let record = record?;
        let Some(id) = parse_number::<u64>(field(&record, Some(id_col))) else {
            continue;
        };

        items.push(CatalogItem {
            id,
            name: field(&record, name).trim().to_string(),
            category: normalize_label(field(&record, category)),
            description: field(&record, description).trim().to_string(),
            keywords: split_keywords(field(&record, keywords)),
            price: parse_number(field(&record, price)),
            avg_rating: parse_number(field(&record, avg_rating)),
            discount: parse_number(field(&record, discount)),
            stock: parse_number(field(&record, stock)),
            text_features: None,
        });
    }

    Ok(items)
}

/// Load the interaction table from any reader (comma-delimited).
pub fn load_interactions_from<R: Read>(reader: R) -> Result<Vec<Interaction>> {
    let mut csv = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::new("interaction", csv.headers()?.clone());

    let user_col = columns.required("user_id")?;
    let item_col = columns.required("item_id")?;
    let kind = columns.index("interaction_type");
    let timestamp = columns.index("timestamp");
    let rating = columns.index("rating");
    let payment_method = columns.index("payment_method");

    let mut interactions = Vec::new();
    for record in csv.records() {
        let record = record?;
        let Some(user_id) = parse_number::<u64>(field(&record, Some(user_col))) else {
            continue;
        };
        let Some(item_id) = parse_number::<u64>(field(&record, Some(item_col))) else {
            continue;
        };

        interactions.push(Interaction {
            user_id,
            item_id,
            kind: normalize_label(field(&record, kind)),
            timestamp: parse_timestamp(field(&record, timestamp)),
            rating: parse_number(field(&record, rating)),
            payment_method: normalize_label(field(&record, payment_method)),
        });
    }

    Ok(interactions)
}

/// Load the user table from a file path.
pub fn load_users<P: AsRef<Path>>(path: P) -> Result<Vec<User>> {
    load_users_from(BufReader::new(File::open(path)?))
}

/// Load the item table from a file path.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogItem>> {
    load_items_from(BufReader::new(File::open(path)?))
}

/// Load the interaction table from a file path.
pub fn load_interactions<P: AsRef<Path>>(path: P) -> Result<Vec<Interaction>> {
    load_interactions_from(BufReader::new(File::open(path)?))
}

/// Load all three tables.
pub fn load_all<P: AsRef<Path>>(
    users_path: P,
    items_path: P,
    interactions_path: P,
) -> Result<Tables> {
    let users = load_users(users_path)?;
    let items = load_items(items_path)?;
    let interactions = load_interactions(interactions_path)?;

    info!(
        users = users.len(),
        items = items.len(),
        interactions = interactions.len(),
        "tables loaded"
    );

    Ok(Tables {
        users,
        items,
        interactions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_users_normalizes_fields() {
        let data = "\
user_id,age,gender,interests,location
1,34,Female,\"Fitness, Travel\",  Bogota
2,not-a-number,MALE,,medellin
";
        let users = load_users_from(data.as_bytes()).unwrap();
        assert_eq!(users.len(), 2);

        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].age, Some(34));
        assert_eq!(users[0].gender, "female");
        assert_eq!(users[0].interests, vec!["fitness", "travel"]);
        assert_eq!(users[0].location, "bogota");

        assert_eq!(users[1].age, None);
        assert!(users[1].interests.is_empty());
    }

    #[test]
    fn test_load_users_missing_id_column_is_fatal() {
        let data = "name,interests\nana,fitness\n";
        let err = load_users_from(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestionError::MissingColumn {
                table: "user",
                column: "user_id"
            }
        ));
    }

    #[test]
    fn test_load_users_skips_unparsable_ids() {
        let data = "user_id,interests\nabc,fitness\n7,travel\n";
        let users = load_users_from(data.as_bytes()).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 7);
    }

    #[test]
    fn test_load_items_semicolon_delimiter() {
        let data = "\
item_id;name;category;description;keywords;price;avg_rating
1;Trail Runner;Footwear;running shoes for trails;Running, Shoes|Outdoor;89.90;4.5
2;Desk Chair;OFFICE;;office\tchair;;bad
";
        let items = load_items_from(data.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].name, "Trail Runner");
        assert_eq!(items[0].category, "footwear");
        assert_eq!(items[0].keywords, vec!["running", "shoes", "outdoor"]);
        assert_eq!(items[0].price, Some(89.90));
        assert_eq!(items[0].avg_rating, Some(4.5));

        assert_eq!(items[1].category, "office");
        assert_eq!(items[1].description, "");
        assert_eq!(items[1].keywords, vec!["office", "chair"]);
        assert_eq!(items[1].price, None);
        assert_eq!(items[1].avg_rating, None);
        assert!(items[1].text_features.is_none());
    }

    #[test]
    fn test_load_items_missing_id_column_is_fatal() {
        let data = "name;category\nchair;office\n";
        let err = load_items_from(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestionError::MissingColumn {
                table: "item",
                column: "item_id"
            }
        ));
    }

    #[test]
    fn test_load_interactions_coercion() {
        let data = "\
user_id,item_id,interaction_type,timestamp,rating,payment_method
1,10,Purchase,2024-03-01 10:30:00,5,Credit Card
1,11,VIEW,not-a-date,,
2,10,purchase,2024-03-02T08:00:00Z,oops,cash
";
        let interactions = load_interactions_from(data.as_bytes()).unwrap();
        assert_eq!(interactions.len(), 3);

        assert_eq!(interactions[0].kind, "purchase");
        assert_eq!(interactions[0].rating, Some(5.0));
        assert_eq!(interactions[0].payment_method, "credit card");
        assert!(interactions[0].timestamp.is_some());

        assert_eq!(interactions[1].kind, "view");
        assert!(interactions[1].timestamp.is_none());
        assert_eq!(interactions[1].rating, None);

        // An unparsable rating is missing, not an error and not a dropped row.
        assert_eq!(interactions[2].rating, None);
        assert!(interactions[2].timestamp.is_some());
    }

    #[test]
    fn test_load_interactions_requires_both_ids() {
        let data = "user_id,rating\n1,5\n";
        let err = load_interactions_from(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestionError::MissingColumn {
                table: "interaction",
                column: "item_id"
            }
        ));
    }
}
