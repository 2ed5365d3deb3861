mod common;

use anyhow::Result;

use expense_tracker::api::{CategoryDto, CategoryPayload, ExpenseDto, NewExpense};
use expense_tracker::cli::client::ApiClient;

#[tokio::test]
async fn client_round_trips_against_server() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = ApiClient::new(&server.base_url)?;
    let category = common::unique("Eating Out");

    let created: CategoryDto = client
        .post(&["categories"], &CategoryPayload { name: category.clone() })
        .await?;
    let fetched: CategoryDto = client.get(&["categories", created.id.as_str()]).await?;
    assert_eq!(fetched, created);

    let expense: ExpenseDto = client
        .post(
            &["expenses"],
            &NewExpense {
                description: "Pizza".to_string(),
                amount: 18.0,
                category: category.clone(),
                date: None,
            },
        )
        .await?;
    let by_category: Vec<ExpenseDto> = client.get(&["expenses", "category", category.as_str()]).await?;
    assert_eq!(by_category, vec![expense.clone()]);

    client.delete(&["expenses", expense.id.as_str()]).await?;
    let err = client
        .delete(&["expenses", expense.id.as_str()])
        .await
        .expect_err("second delete should fail");
    assert!(err.to_string().contains("Expense not found"), "unexpected error: {}", err);

    Ok(())
}
