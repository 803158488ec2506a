//! Queries against a presence analyzer server, rendered as tables.

use crate::output::Table;
use anyhow::Context;
use log::info;
use pa_core::api::PresenceClient;
use pa_core::chart::{to_chart_rows, ChartRow};
use pa_core::entity::SelectableEntity;
use pa_core::presence::{MonthlyMean, WeekdayTotal};
use pa_utils::intervals::format_duration;

pub fn entities_table(entities: &[SelectableEntity]) -> Table {
    let mut table = Table::new(vec!["id", "label"]);
    for entity in entities {
        table.push(vec![entity.id.clone(), entity.label.clone()]);
    }
    table
}

pub fn chart_rows_table(rows: &[ChartRow]) -> Table {
    let mut table = Table::new(vec!["label", "start", "end"]);
    for row in rows {
        let (label, start, end) = row.display_tuple();
        table.push(vec![label, start, end]);
    }
    table
}

/// Monthly ranking: chart rows plus each user's avatar.
pub fn ranking_table(records: &[MonthlyMean]) -> Table {
    let mut table = Table::new(vec!["label", "start", "end", "avatar"]);
    for (row, record) in to_chart_rows(records).iter().zip(records) {
        let (label, start, end) = row.display_tuple();
        table.push(vec![label, start, end, record.avatar.clone()]);
    }
    table
}

pub fn totals_table(totals: &[WeekdayTotal]) -> Table {
    let mut table = Table::new(vec!["weekday", "presence"]);
    for total in totals {
        table.push(vec![total.weekday.clone(), format_duration(total.seconds)]);
    }
    table
}

pub async fn users(client: &PresenceClient) -> anyhow::Result<Table> {
    let users = client.users().await.context("Failed to list users")?;
    info!("Fetched {} users", users.len());
    Ok(entities_table(&users))
}

pub async fn months(client: &PresenceClient) -> anyhow::Result<Table> {
    let months = client.months().await.context("Failed to list months")?;
    info!("Fetched {} months", months.len());
    Ok(entities_table(&months))
}

pub async fn start_end(client: &PresenceClient, user_id: &str) -> anyhow::Result<Table> {
    let records = client
        .presence_start_end(user_id)
        .await
        .with_context(|| format!("No presence data for user {}", user_id))?;
    Ok(chart_rows_table(&to_chart_rows(&records)))
}

pub async fn top5(client: &PresenceClient, month: &str) -> anyhow::Result<Table> {
    let records = client
        .top5_monthly(month)
        .await
        .with_context(|| format!("No ranking for month {}", month))?;
    Ok(ranking_table(&records))
}

pub async fn avatar(client: &PresenceClient, user_id: &str) -> anyhow::Result<String> {
    client
        .user_image(user_id)
        .await
        .with_context(|| format!("No avatar for user {}", user_id))
}

pub async fn mean_time(client: &PresenceClient, user_id: &str) -> anyhow::Result<Table> {
    let totals = client
        .mean_time_weekday(user_id)
        .await
        .with_context(|| format!("No mean presence for user {}", user_id))?;
    Ok(totals_table(&totals))
}

pub async fn presence_weekday(client: &PresenceClient, user_id: &str) -> anyhow::Result<Table> {
    let totals = client
        .presence_weekday(user_id)
        .await
        .with_context(|| format!("No weekday presence for user {}", user_id))?;
    Ok(totals_table(&totals))
}
