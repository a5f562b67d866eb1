//! DynamoDB error mapping.
//!
//! SDK errors become `StoreError`s carrying the SDK's own message. Transport
//! failures are `ConnectionFailed`, everything the service answered with is
//! `QueryFailed`.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use ecskudos_core::storage::StoreError;

/// Map any operation's SDK error to StoreError, keeping the full error text.
pub fn map_sdk_error<E, R>(err: SdkError<E, R>) -> StoreError
where
    E: Error + 'static,
    R: Debug,
{
    let message = DisplayErrorContext(&err).to_string();

    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            StoreError::ConnectionFailed(message)
        }
        _ => StoreError::QueryFailed(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::operation::put_item::PutItemError;
    use aws_sdk_dynamodb::operation::query::QueryError;
    use aws_sdk_dynamodb::types::error::{
        ProvisionedThroughputExceededException, ResourceNotFoundException,
    };

    #[test]
    fn test_service_error_message_is_kept() {
        let err: SdkError<PutItemError, ()> = SdkError::service_error(
            PutItemError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found: Table: ecskudos-test-kudos")
                    .build(),
            ),
            (),
        );

        match map_sdk_error(err) {
            StoreError::QueryFailed(message) => {
                assert!(message.contains("ResourceNotFoundException"), "{message}");
                assert!(
                    message.contains("Requested resource not found: Table: ecskudos-test-kudos"),
                    "{message}"
                );
            }
            other => panic!("expected QueryFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_query_service_error_is_not_prefixed_twice() {
        let err: SdkError<QueryError, ()> = SdkError::service_error(
            QueryError::ProvisionedThroughputExceededException(
                ProvisionedThroughputExceededException::builder()
                    .message("Rate of requests exceeds the allowed throughput")
                    .build(),
            ),
            (),
        );

        let rendered = map_sdk_error(err).to_string();

        assert!(rendered.starts_with("Query failed: "), "{rendered}");
        assert_eq!(rendered.matches("Query failed").count(), 1, "{rendered}");
        assert!(rendered.contains("Rate of requests exceeds the allowed throughput"));
    }

    #[test]
    fn test_timeout_is_connection_failure() {
        let err: SdkError<QueryError, ()> = SdkError::timeout_error("connect timed out");

        match map_sdk_error(err) {
            StoreError::ConnectionFailed(message) => {
                assert!(message.contains("connect timed out"), "{message}");
            }
            other => panic!("expected ConnectionFailed, got {other:?}"),
        }
    }
}
