use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use tracing::debug;

use super::item::{from_attribute_map, to_attribute_map};
use super::{Item, StoreError, TableStore};

/// DynamoDB-backed table store using ambient AWS credentials.
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
}

impl DynamoStore {
    /// Builds a client for `region`. `endpoint_url` points the client at a
    /// local DynamoDB instead of the regional endpoint.
    pub async fn connect(region: &str, endpoint_url: Option<&str>) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
        if let Some(url) = endpoint_url {
            debug!("Using DynamoDB endpoint {url}");
            loader = loader.endpoint_url(url);
        }
        let config = loader.load().await;

        Self {
            client: Client::new(&config),
        }
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TableStore for DynamoStore {
    async fn put_item(&self, table: &str, item: Item) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(to_attribute_map(&item)))
            .send()
            .await
            .map_err(|err| match err.into_service_error() {
                PutItemError::ResourceNotFoundException(_) => {
                    StoreError::TableNotFound(table.to_string())
                }
                other => StoreError::Dynamo(DisplayErrorContext(other).to_string()),
            })?;
        Ok(())
    }

    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(table)
            .set_key(Some(to_attribute_map(&key)))
            .send()
            .await
            .map_err(|err| match err.into_service_error() {
                GetItemError::ResourceNotFoundException(_) => {
                    StoreError::TableNotFound(table.to_string())
                }
                other => StoreError::Dynamo(DisplayErrorContext(other).to_string()),
            })?;

        output.item().map(from_attribute_map).transpose()
    }
}
