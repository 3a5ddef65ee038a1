use seabattle::{Coord, InMemoryTransport, ShotResult, Transport};

#[tokio::test]
async fn test_move_and_result_exchange() -> anyhow::Result<()> {
    let (mut t1, mut t2) = InMemoryTransport::pair();

    t1.send_move(Coord::new(2, 6).unwrap()).await?;
    assert_eq!(t2.recv_move().await?, Coord::new(2, 6).unwrap());

    t2.send_result(ShotResult::Kill).await?;
    assert_eq!(t1.recv_result().await?, ShotResult::Kill);
    Ok(())
}

#[tokio::test]
async fn test_bytes_arrive_in_order_across_writes() -> anyhow::Result<()> {
    let (mut t1, mut t2) = InMemoryTransport::pair();
    t1.write_all(b"B").await?;
    t1.write_all(b"31").await?;

    assert_eq!(t2.recv_move().await?, Coord::new(1, 2).unwrap());
    assert_eq!(t2.recv_result().await?, ShotResult::Hit);
    Ok(())
}

#[tokio::test]
async fn test_malformed_move_is_an_error() -> anyhow::Result<()> {
    let (mut t1, mut t2) = InMemoryTransport::pair();
    t1.write_all(b"I1").await?;
    let err = t2.recv_move().await.unwrap_err();
    assert!(err.to_string().contains("Malformed move"), "{}", err);
    Ok(())
}

#[tokio::test]
async fn test_closed_peer_fails_reads_and_writes() -> anyhow::Result<()> {
    let (mut t1, t2) = InMemoryTransport::pair();
    drop(t2);
    assert!(t1.recv_move().await.is_err());
    assert!(t1.send_result(ShotResult::Miss).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_partial_message_then_close() -> anyhow::Result<()> {
    let (mut t1, mut t2) = InMemoryTransport::pair();
    t1.write_all(b"A").await?;
    drop(t1);
    let err = t2.recv_move().await.unwrap_err();
    assert!(err.to_string().contains("Channel closed"));
    Ok(())
}

#[tokio::test]
async fn test_buffered_bytes_survive_peer_drop() -> anyhow::Result<()> {
    let (mut t1, mut t2) = InMemoryTransport::pair();
    t1.send_result(ShotResult::Kill).await?;
    drop(t1);
    assert_eq!(t2.recv_result().await?, ShotResult::Kill);
    Ok(())
}
