//! Concurrency tests: the shared reply buffer is read-only, so parallel
//! handlers must never corrupt, truncate, or interleave payloads.

use bytes::Bytes;

use mockprox::http::FALLBACK_PAYLOAD;

mod common;

#[tokio::test]
async fn concurrent_triggers_each_get_full_payload() {
    // Large enough to span many socket writes.
    let reply: Bytes = "{\"chunk\":\"0123456789abcdef\"}\n"
        .repeat(2048)
        .into_bytes()
        .into();
    let (addr, shutdown) = common::start_server(reply.clone()).await;

    let concurrency = 50;
    let mut tasks = Vec::with_capacity(concurrency);
    for _ in 0..concurrency {
        tasks.push(tokio::spawn(async move {
            common::raw_request(addr, &common::trigger_request()).await
        }));
    }

    for task in tasks {
        let response = task.await.unwrap();
        assert_eq!(response.len(), reply.len(), "payload truncated");
        assert_eq!(response, reply.to_vec(), "payload corrupted");
    }

    shutdown.trigger();
}

#[tokio::test]
async fn mixed_traffic_does_not_cross_payloads() {
    let reply = Bytes::from_static(b"{\"ok\":true}");
    let (addr, shutdown) = common::start_server(reply.clone()).await;

    let mut tasks = Vec::new();
    for i in 0..40 {
        tasks.push(tokio::spawn(async move {
            if i % 2 == 0 {
                (
                    true,
                    common::raw_request(addr, &common::trigger_request()).await,
                )
            } else {
                let request = b"GET /health HTTP/1.1\r\nHost: localhost\r\n\r\n";
                (false, common::raw_request(addr, request).await)
            }
        }));
    }

    for task in tasks {
        let (is_trigger, response) = task.await.unwrap();
        if is_trigger {
            assert_eq!(response, reply.to_vec());
        } else {
            assert_eq!(response, FALLBACK_PAYLOAD);
        }
    }

    shutdown.trigger();
}
