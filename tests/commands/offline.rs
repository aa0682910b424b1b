//! The display layer talks to the core through `FxService::execute`; these
//! cover the command seam end to end against the mock server.

use currencyapi_rs::{FxRequest, FxResponse, FxService};

use crate::common;

#[tokio::test]
async fn resolve_rate_command_returns_the_rate() {
    let server = common::setup_server();
    let body = common::rates_body(&[("EUR", 0.92)]);
    common::mock_latest(&server, "USD", &body);

    let client = common::client_for(&server);
    let resp = client
        .execute(FxRequest::ResolveRate {
            from: "USD".into(),
            to: "EUR".into(),
        })
        .await
        .unwrap();

    assert_eq!(resp, FxResponse::Rate(0.92));
}

#[tokio::test]
async fn resolve_rate_command_surfaces_failures_as_err() {
    let server = common::setup_server();
    common::mock_latest_status(&server, "USD", 502);

    let client = common::client_for(&server);
    let err = client
        .execute(FxRequest::ResolveRate {
            from: "USD".into(),
            to: "EUR".into(),
        })
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn build_series_command_never_errors() {
    let server = common::setup_server();
    // no historical mocks at all: every day request 404s

    let client = common::client_for(&server);
    let resp = client
        .execute(FxRequest::BuildSeries {
            currency: "EUR".into(),
            days: 2,
        })
        .await
        .unwrap();

    let FxResponse::Series(series) = resp else {
        panic!("expected a series response");
    };
    assert!(series.is_empty());
    assert_eq!(series.days_requested(), 2);
}

#[tokio::test]
async fn a_fake_service_satisfies_the_seam() {
    use std::future::Future;
    use std::pin::Pin;

    use currencyapi_rs::{FxError, RateSeries};

    // what a display layer would mock in its own tests
    struct Fixed(f64);

    impl FxService for Fixed {
        fn execute<'a>(
            &'a self,
            req: FxRequest,
        ) -> Pin<Box<dyn Future<Output = Result<FxResponse, FxError>> + Send + 'a>> {
            Box::pin(async move {
                match req {
                    FxRequest::ResolveRate { .. } => Ok(FxResponse::Rate(self.0)),
                    FxRequest::BuildSeries { .. } => {
                        Ok(FxResponse::Series(RateSeries::default()))
                    }
                }
            })
        }
    }

    let svc: &dyn FxService = &Fixed(1.25);
    let resp = svc
        .execute(FxRequest::ResolveRate {
            from: "USD".into(),
            to: "CHF".into(),
        })
        .await
        .unwrap();
    assert_eq!(resp, FxResponse::Rate(1.25));
}
