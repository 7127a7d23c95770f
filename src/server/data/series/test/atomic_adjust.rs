use std::sync::Arc;

use super::*;
use test_utils::factory::series::SeriesFactory;

/// Tests incrementing the ranking counter.
///
/// Expected: Ok(1) with ranking increased by one
#[tokio::test]
async fn increments_ranking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_series_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = SeriesFactory::new(db).ranking(3).build().await?;

    let repo = SeriesRepository::new(db.clone());
    let rows = repo
        .atomic_adjust(created.id, CounterField::Ranking, 1)
        .await?;

    assert_eq!(rows, 1);
    assert_eq!(repo.find_by_id(created.id).await?.unwrap().ranking, 4);

    Ok(())
}

/// Tests decrementing the ranking below zero.
///
/// Expected: Ok(1) with negative ranking
#[tokio::test]
async fn decrements_ranking_below_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_series_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = SeriesFactory::new(db).ranking(0).build().await?;

    let repo = SeriesRepository::new(db.clone());
    repo.atomic_adjust(created.id, CounterField::Ranking, -1)
        .await?;

    assert_eq!(repo.find_by_id(created.id).await?.unwrap().ranking, -1);

    Ok(())
}

/// Tests incrementing the episode counter below the cap.
///
/// Expected: Ok(1) with counter increased and other fields untouched
#[tokio::test]
async fn increments_episode_below_cap() -> Result<(), AppError> {
    let test = TestBuilder::new().with_series_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = SeriesFactory::new(db)
        .total_episodes(10)
        .last_episode_watched(3)
        .ranking(2)
        .build()
        .await?;

    let repo = SeriesRepository::new(db.clone());
    let rows = repo
        .atomic_adjust(created.id, CounterField::LastEpisodeWatched, 1)
        .await?;

    assert_eq!(rows, 1);
    let updated = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(updated.last_episode_watched, 4);
    assert_eq!(updated.ranking, 2);

    Ok(())
}

/// Tests that the episode counter does not move past the cap.
///
/// Expected: Ok(0) with counter unchanged
#[tokio::test]
async fn refuses_episode_increment_at_cap() -> Result<(), AppError> {
    let test = TestBuilder::new().with_series_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = SeriesFactory::new(db)
        .total_episodes(5)
        .last_episode_watched(5)
        .build()
        .await?;

    let repo = SeriesRepository::new(db.clone());
    let rows = repo
        .atomic_adjust(created.id, CounterField::LastEpisodeWatched, 1)
        .await?;

    assert_eq!(rows, 0);
    assert_eq!(
        repo.find_by_id(created.id)
            .await?
            .unwrap()
            .last_episode_watched,
        5
    );

    Ok(())
}

/// Tests that an unknown episode total (zero) never caps the counter.
///
/// Expected: Ok(1) with counter increased
#[tokio::test]
async fn increments_episode_without_total() -> Result<(), AppError> {
    let test = TestBuilder::new().with_series_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = SeriesFactory::new(db)
        .total_episodes(0)
        .last_episode_watched(40)
        .build()
        .await?;

    let repo = SeriesRepository::new(db.clone());
    let rows = repo
        .atomic_adjust(created.id, CounterField::LastEpisodeWatched, 1)
        .await?;

    assert_eq!(rows, 1);
    assert_eq!(
        repo.find_by_id(created.id)
            .await?
            .unwrap()
            .last_episode_watched,
        41
    );

    Ok(())
}

/// Tests adjusting a series that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn affects_no_rows_for_nonexistent_series() -> Result<(), AppError> {
    let test = TestBuilder::new().with_series_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeriesRepository::new(db.clone());
    let rows = repo
        .atomic_adjust(999999, CounterField::Ranking, 1)
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}

/// Tests concurrent ranking increments on the same series.
///
/// Each task issues its own UPDATE; none may be lost.
///
/// Expected: Ok with ranking equal to the number of tasks
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_increments_are_not_lost() -> Result<(), AppError> {
    const TASKS: i32 = 25;

    let test = TestBuilder::new().with_series_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = SeriesFactory::new(db).ranking(0).build().await?;
    let id = created.id;
    let repo = Arc::new(SeriesRepository::new(db.clone()));

    let handles: Vec<_> = (0..TASKS)
        .map(|_| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.atomic_adjust(id, CounterField::Ranking, 1).await
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap()?, 1);
    }

    assert_eq!(repo.find_by_id(id).await?.unwrap().ranking, TASKS);

    Ok(())
}

/// Tests concurrent episode increments racing towards the cap.
///
/// Expected: Ok with the counter stopping exactly at the total
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_episode_increments_stop_at_cap() -> Result<(), AppError> {
    let test = TestBuilder::new().with_series_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = SeriesFactory::new(db)
        .total_episodes(10)
        .last_episode_watched(5)
        .build()
        .await?;
    let id = created.id;
    let repo = Arc::new(SeriesRepository::new(db.clone()));

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.atomic_adjust(id, CounterField::LastEpisodeWatched, 1)
                    .await
            })
        })
        .collect();

    let mut applied = 0;
    for handle in handles {
        applied += handle.await.unwrap()?;
    }

    assert_eq!(applied, 5);
    assert_eq!(
        repo.find_by_id(created.id)
            .await?
            .unwrap()
            .last_episode_watched,
        10
    );

    Ok(())
}

/// Tests that the ranking is not incremented past the largest storable value.
///
/// Verifies the row stays readable by both single lookups and listing.
///
/// Expected: Ok(0) with ranking unchanged
#[tokio::test]
async fn refuses_ranking_increment_at_i32_max() -> Result<(), AppError> {
    let test = TestBuilder::new().with_series_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = SeriesFactory::new(db).ranking(i32::MAX).build().await?;

    let repo = SeriesRepository::new(db.clone());
    let rows = repo
        .atomic_adjust(created.id, CounterField::Ranking, 1)
        .await?;

    assert_eq!(rows, 0);
    assert_eq!(
        repo.find_by_id(created.id).await?.unwrap().ranking,
        i32::MAX
    );
    assert_eq!(repo.list_all().await?.len(), 1);

    Ok(())
}

/// Tests that the ranking is not decremented past the smallest storable value.
///
/// Expected: Ok(0) with ranking unchanged
#[tokio::test]
async fn refuses_ranking_decrement_at_i32_min() -> Result<(), AppError> {
    let test = TestBuilder::new().with_series_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = SeriesFactory::new(db).ranking(i32::MIN).build().await?;

    let repo = SeriesRepository::new(db.clone());
    let rows = repo
        .atomic_adjust(created.id, CounterField::Ranking, -1)
        .await?;

    assert_eq!(rows, 0);
    assert_eq!(
        repo.find_by_id(created.id).await?.unwrap().ranking,
        i32::MIN
    );

    Ok(())
}

/// Tests that an uncapped episode counter stops at the largest storable value.
///
/// Expected: Ok(0) with counter unchanged and the table still listable
#[tokio::test]
async fn refuses_episode_increment_at_i32_max_without_total() -> Result<(), AppError> {
    let test = TestBuilder::new().with_series_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = SeriesFactory::new(db)
        .total_episodes(0)
        .last_episode_watched(i32::MAX)
        .build()
        .await?;

    let repo = SeriesRepository::new(db.clone());
    let rows = repo
        .atomic_adjust(created.id, CounterField::LastEpisodeWatched, 1)
        .await?;

    assert_eq!(rows, 0);
    let all = repo.list_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].last_episode_watched, i32::MAX);

    Ok(())
}
