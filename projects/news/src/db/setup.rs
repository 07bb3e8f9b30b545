//! Schema creation and the demo data set loaded outside production.

use chrono::NaiveDateTime;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::db::{
    article::models::NewArticle,
    category::models::NewCategory,
    comment::models::NewComment,
    rating::models::NewRating,
    schema::{articles, categories, comments, ratings},
};

const CREATE_SCHEMA: &str = include_str!("../../migrations/2018-11-01-000000_create_news/up.sql");
const DROP_SCHEMA: &str = include_str!("../../migrations/2018-11-01-000000_create_news/down.sql");

const LOREM: &str = "Lorem ipsum dolor sit amet, ad officiis menandri est. Porro scripta meliore nam at, et eam solet partem. Te magna affert vocibus sea, ut imperdiet hendrerit consetetur duo, inani albucius contentiones te eam. Vel amet meis facilisi eu. Eam ei populo altera, ex cibo elitr epicuri eam, nec malorum vocibus at.";

const SEED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("CreateSchema: {source}")]
    CreateSchema {
        #[source]
        source: diesel::result::Error,
    },
    #[error("DropSchema: {source}")]
    DropSchema {
        #[source]
        source: diesel::result::Error,
    },
    #[error("Seed: {source}")]
    Seed {
        #[from]
        source: diesel::result::Error,
    },
    #[error("SeedTimestamp: {value}: {source}")]
    SeedTimestamp {
        value: &'static str,
        #[source]
        source: chrono::ParseError,
    },
}

/// Creates any missing tables.
pub fn create_schema(conn: &mut PgConnection) -> Result<(), SetupError> {
    conn.batch_execute(CREATE_SCHEMA)
        .map_err(|source| SetupError::CreateSchema { source })
}

pub fn drop_schema(conn: &mut PgConnection) -> Result<(), SetupError> {
    conn.batch_execute(DROP_SCHEMA)
        .map_err(|source| SetupError::DropSchema { source })
}

/// Drops every table, recreates them and loads the demo data.
pub fn reset_with_seed(conn: &mut PgConnection) -> Result<(), SetupError> {
    drop_schema(conn)?;
    create_schema(conn)?;
    seed(conn)?;
    info!("database reset with seed data");
    Ok(())
}

/// Loads the demo data into empty tables. Ids are assigned in insertion
/// order, so article 1 ends up with ratings [5, 3, 4].
pub fn seed(conn: &mut PgConnection) -> Result<(), SetupError> {
    let new_categories: Vec<NewCategory> = ["Laptop", "Mobile", "Gaming", "Apps"]
        .into_iter()
        .map(|name| NewCategory { name: name.to_string() })
        .collect();

    let new_articles = vec![
        seed_article("2018-11-08 18:36", "Hans Hansen", "New laptop from HP",
            "https://cdn.mos.cms.futurecdn.net/550709fa268b8fd2d68f71f87aaf07a6.jpg", 1, 1)?,
        seed_article("2018-11-04 09:02", "Harald Berg", "The top five best student laptops",
            "http://s1.1zoom.me/b5050/686/362492-commander06_1920x1080.jpg", 1, 1)?,
        seed_article("2018-10-05 19:47", "Jack Johnson", "New iOS update with a lot of bugs!",
            "https://i.pinimg.com/originals/d5/84/31/d58431cd37515f48d57312c4c7e5964f.jpg", 1, 2)?,
        seed_article("2018-11-01 00:01", "Rick Black", "Is this the game of the year 2018?",
            "https://hdqwalls.com/download/red-dead-redemption-2-62-1920x1080.jpg", 1, 3)?,
        seed_article("2017-04-22 04:53", "Lars Martinsen", "10 interesting apps",
            "https://cdn.hipwallpaper.com/i/76/28/B0LneY.jpg", 2, 4)?,
    ];

    let new_ratings: Vec<NewRating> = [(5, 1), (3, 1), (2, 2), (3, 2), (1, 3), (3, 3), (5, 3), (4, 1)]
        .into_iter()
        .map(|(value, article_id)| NewRating { value, article_id })
        .collect();

    let new_comments = vec![
        seed_comment("2018-11-06 18:36", "Herman Ryen Martinsen", "Good article!", 1)?,
        seed_comment("2018-11-05 17:01", "carl", "Very bad article, should be removed!", 1)?,
        seed_comment("2018-11-06 18:36", "Petter", "Very nice article!", 2)?,
        seed_comment("2018-11-06 18:36", "Gustav", "First!!!", 3)?,
    ];

    conn.transaction(|conn| {
        diesel::insert_into(categories::table).values(&new_categories).execute(conn)?;
        diesel::insert_into(articles::table).values(&new_articles).execute(conn)?;
        diesel::insert_into(ratings::table).values(&new_ratings).execute(conn)?;
        diesel::insert_into(comments::table).values(&new_comments).execute(conn)
    })?;

    Ok(())
}

fn seed_timestamp(value: &'static str) -> Result<NaiveDateTime, SetupError> {
    NaiveDateTime::parse_from_str(value, SEED_TIMESTAMP_FORMAT)
        .map_err(|source| SetupError::SeedTimestamp { value, source })
}

fn seed_article(
    time_published: &'static str,
    written_by: &str,
    heading: &str,
    image: &str,
    priority: i32,
    category_id: i32,
) -> Result<NewArticle, SetupError> {
    Ok(NewArticle {
        time_published: seed_timestamp(time_published)?,
        written_by: written_by.to_string(),
        heading: heading.to_string(),
        text: LOREM.to_string(),
        image: image.to_string(),
        priority,
        category_id,
    })
}

fn seed_comment(
    time_published: &'static str,
    nickname: &str,
    text: &str,
    article_id: i32,
) -> Result<NewComment, SetupError> {
    Ok(NewComment {
        time_published: seed_timestamp(time_published)?,
        nickname: nickname.to_string(),
        text: text.to_string(),
        article_id,
    })
}
