//! Store tests against a real PostgreSQL database.
//!
//! Set `TEST_DATABASE_URL` to run them; every test resets the database to
//! the seed data first, so point it at a scratch database. Without the
//! variable each test prints a skip notice and returns early.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use diesel::{connection::SimpleConnection, prelude::*};
use projects_news::db::{
    article::{
        models::ArticleChanges,
        queries::{
            delete_article, get_rated_article, load_rated_articles, update_article,
            RatedArticleQuery,
        },
    },
    build_pool,
    category::queries::{delete_category, get_category, list_categories},
    comment::queries::list_comments,
    rating::{
        models::NewRating,
        queries::{insert_rating, list_ratings, InsertRatingError},
    },
    schema::{articles, comments, ratings},
    setup, PgPool, PoolSettings,
};
use serde_json::Value;
use tokio::sync::Mutex;
use tower::ServiceExt;

static DB_LOCK: Mutex<()> = Mutex::const_new(());

fn seeded_pool() -> Option<PgPool> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("skipped: TEST_DATABASE_URL is not set");
        return None;
    };
    let pool = build_pool(&url, &PoolSettings { max_size: 2, ..PoolSettings::default() })
        .expect("connect to TEST_DATABASE_URL");
    let mut conn = pool.get().expect("pooled connection");
    setup::reset_with_seed(&mut conn).expect("reset and seed");
    Some(pool)
}

fn ids(rows: &[projects_news::db::article::models::RatedArticle]) -> Vec<i32> {
    rows.iter().map(|row| row.article.id).collect()
}

#[test]
fn seeded_article_rating_is_mean_of_values() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();

    let article = get_rated_article(&mut conn, 1).unwrap().unwrap();
    assert_eq!(article.rating, Some(4.0));

    let article = get_rated_article(&mut conn, 2).unwrap().unwrap();
    assert!((article.rating.unwrap() - 2.5).abs() < 1e-9);

    let article = get_rated_article(&mut conn, 3).unwrap().unwrap();
    assert!((article.rating.unwrap() - 3.0).abs() < 1e-9);
}

#[test]
fn unrated_articles_have_no_rating() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();

    for id in [4, 5] {
        let article = get_rated_article(&mut conn, id).unwrap().unwrap();
        assert_eq!(article.rating, None);
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["rating"], Value::Null);
        assert_eq!(json["id"], id);
    }
}

#[test]
fn missing_article_is_none() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();

    assert!(get_rated_article(&mut conn, 404).unwrap().is_none());
}

#[test]
fn listing_is_newest_first() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();

    let rows = load_rated_articles(&mut conn, &RatedArticleQuery::all()).unwrap();
    assert_eq!(ids(&rows), vec![1, 2, 4, 3, 5]);
    assert!(rows
        .windows(2)
        .all(|pair| pair[0].article.time_published >= pair[1].article.time_published));
}

#[test]
fn category_filter_only_returns_that_category() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();

    let rows = load_rated_articles(&mut conn, &RatedArticleQuery::by_category(1)).unwrap();
    assert_eq!(ids(&rows), vec![1, 2]);
    assert!(rows.iter().all(|row| row.article.category_id == 1));

    let rows = load_rated_articles(&mut conn, &RatedArticleQuery::by_category(42)).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn limit_truncates_after_sorting() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();

    let rows = load_rated_articles(&mut conn, &RatedArticleQuery::by_priority(1).with_limit(2)).unwrap();
    assert_eq!(ids(&rows), vec![1, 2]);

    let rows = load_rated_articles(&mut conn, &RatedArticleQuery::by_priority(2).with_limit(20)).unwrap();
    assert_eq!(ids(&rows), vec![5]);

    let rows = load_rated_articles(&mut conn, &RatedArticleQuery::all().with_limit(3)).unwrap();
    assert_eq!(ids(&rows), vec![1, 2, 4]);

    let rows = load_rated_articles(&mut conn, &RatedArticleQuery::all().with_limit(0)).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn deleting_category_cascades() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();

    assert_eq!(delete_category(&mut conn, 1).unwrap(), 1);
    assert!(get_category(&mut conn, 1).unwrap().is_none());
    assert_eq!(list_categories(&mut conn).unwrap().len(), 3);

    let remaining: Vec<i32> = articles::table.select(articles::id).order_by(articles::id).load(&mut *conn).unwrap();
    assert_eq!(remaining, vec![3, 4, 5]);

    let orphan_ratings: i64 = ratings::table
        .filter(ratings::article_id.eq_any(vec![1, 2]))
        .count()
        .get_result(&mut *conn)
        .unwrap();
    let orphan_comments: i64 = comments::table
        .filter(comments::article_id.eq_any(vec![1, 2]))
        .count()
        .get_result(&mut *conn)
        .unwrap();
    assert_eq!(orphan_ratings, 0);
    assert_eq!(orphan_comments, 0);

    assert_eq!(list_ratings(&mut conn, 3).unwrap().len(), 3);
    assert_eq!(delete_category(&mut conn, 1).unwrap(), 0);
}

/// Swaps every `ON DELETE CASCADE` foreign key for a plain one, so any
/// child row left behind by a delete makes it fail.
const WITHOUT_FK_CASCADE: &str = "
    ALTER TABLE articles DROP CONSTRAINT articles_category_id_fkey,
        ADD CONSTRAINT articles_category_id_fkey FOREIGN KEY (category_id) REFERENCES categories(id);
    ALTER TABLE ratings DROP CONSTRAINT ratings_article_id_fkey,
        ADD CONSTRAINT ratings_article_id_fkey FOREIGN KEY (article_id) REFERENCES articles(id);
    ALTER TABLE comments DROP CONSTRAINT comments_article_id_fkey,
        ADD CONSTRAINT comments_article_id_fkey FOREIGN KEY (article_id) REFERENCES articles(id);
";

fn count_children(conn: &mut PgConnection, article_ids: Vec<i32>) -> (i64, i64, i64) {
    let article_count: i64 = articles::table
        .filter(articles::id.eq_any(article_ids.clone()))
        .count()
        .get_result(conn)
        .unwrap();
    let rating_count: i64 = ratings::table
        .filter(ratings::article_id.eq_any(article_ids.clone()))
        .count()
        .get_result(conn)
        .unwrap();
    let comment_count: i64 = comments::table
        .filter(comments::article_id.eq_any(article_ids))
        .count()
        .get_result(conn)
        .unwrap();
    (article_count, rating_count, comment_count)
}

#[test]
fn category_delete_cascades_without_store_cascade() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();
    conn.batch_execute(WITHOUT_FK_CASCADE).unwrap();

    assert_eq!(delete_category(&mut conn, 1).unwrap(), 1);
    assert_eq!(count_children(&mut conn, vec![1, 2]), (0, 0, 0));
    assert_eq!(count_children(&mut conn, vec![3]), (1, 3, 1));
}

#[test]
fn article_delete_cascades_without_store_cascade() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();
    conn.batch_execute(WITHOUT_FK_CASCADE).unwrap();

    assert_eq!(delete_article(&mut conn, 1).unwrap(), 1);
    assert_eq!(count_children(&mut conn, vec![1]), (0, 0, 0));
    assert_eq!(count_children(&mut conn, vec![2]), (1, 2, 1));
}

#[test]
fn comments_are_newest_first() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();

    let listed = list_comments(&mut conn, 1).unwrap();
    let ids: Vec<i32> = listed.iter().map(|comment| comment.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(listed[0].time_published > listed[1].time_published);
}

#[test]
fn deleting_article_removes_ratings_and_comments() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();

    assert_eq!(delete_article(&mut conn, 3).unwrap(), 1);
    assert!(list_ratings(&mut conn, 3).unwrap().is_empty());
    assert!(list_comments(&mut conn, 3).unwrap().is_empty());
    assert_eq!(delete_article(&mut conn, 3).unwrap(), 0);
}

#[test]
fn new_rating_moves_the_mean() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();

    insert_rating(&mut conn, &NewRating { value: 5, article_id: 4 }).unwrap();
    insert_rating(&mut conn, &NewRating { value: 2, article_id: 4 }).unwrap();

    let article = get_rated_article(&mut conn, 4).unwrap().unwrap();
    assert_eq!(article.rating, Some(3.5));
}

#[test]
fn rating_for_missing_article_is_rejected() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();

    let err = insert_rating(&mut conn, &NewRating { value: 3, article_id: 999 }).unwrap_err();
    assert!(matches!(err, InsertRatingError::ArticleNotFound { article_id: 999 }));
}

#[test]
fn partial_update_keeps_other_fields() {
    let _guard = DB_LOCK.blocking_lock();
    let Some(pool) = seeded_pool() else { return };
    let mut conn = pool.get().unwrap();

    let changes = ArticleChanges { heading: Some("HP refresh".to_string()), ..ArticleChanges::default() };
    assert_eq!(update_article(&mut conn, 1, &changes).unwrap(), 1);

    let article = get_rated_article(&mut conn, 1).unwrap().unwrap().article;
    assert_eq!(article.heading, "HP refresh");
    assert_eq!(article.written_by, "Hans Hansen");
    assert_eq!(update_article(&mut conn, 404, &changes).unwrap(), 0);
}

#[tokio::test]
async fn http_listing_serialises_camel_case_with_rating() {
    let _guard = DB_LOCK.lock().await;
    let Some(pool) = tokio::task::spawn_blocking(seeded_pool).await.unwrap() else { return };

    let request = Request::builder()
        .uri("/articles?categoryId=1&limit=1")
        .body(Body::empty())
        .unwrap();
    let response = projects_news::endpoints::router(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(rows[0]["categoryId"], 1);
    assert_eq!(rows[0]["writtenBy"], "Hans Hansen");
    assert_eq!(rows[0]["rating"], 4.0);

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/categories/99")
        .body(Body::empty())
        .unwrap();
    let response = projects_news::endpoints::router(pool).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_posts_to_missing_article_are_not_found() {
    let _guard = DB_LOCK.lock().await;
    let Some(pool) = tokio::task::spawn_blocking(seeded_pool).await.unwrap() else { return };

    let posts = [
        ("/articles/999/ratings", r#"{"value": 3}"#),
        ("/articles/999/comments", r#"{"nickname": "kari", "text": "Hello"}"#),
    ];
    for (uri, body) in posts {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = projects_news::endpoints::router(pool.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "POST {uri}");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(String::from_utf8_lossy(&bytes), "NotFound: article 999");
    }
}
