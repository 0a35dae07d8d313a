use std::thread;
use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use crate::wire::{Error, Reader, Writer};
use super::{Metrics, Snapshot, WIRE_LEN};

#[test]
fn decode_full_record() -> Result<()> {
    let vec = record();
    assert_eq!(WIRE_LEN, vec.len());

    let mut reader = Reader::new(&vec);
    let snapshot = Snapshot::decode(&mut reader)?;

    assert_eq!(1_650_000_000_123, snapshot.last_update_millis());
    assert_eq!(last_update(),     snapshot.last_update_time());

    assert_eq!(11,   snapshot.maximum_active_jobs());
    assert_eq!(12,   snapshot.current_active_jobs());
    assert_eq!(12.5, snapshot.average_active_jobs());
    assert_eq!(21,   snapshot.maximum_waiting_jobs());
    assert_eq!(22,   snapshot.current_waiting_jobs());
    assert_eq!(22.5, snapshot.average_waiting_jobs());
    assert_eq!(31,   snapshot.maximum_rejected_jobs());
    assert_eq!(32,   snapshot.current_rejected_jobs());
    assert_eq!(32.5, snapshot.average_rejected_jobs());
    assert_eq!(33,   snapshot.total_rejected_jobs());
    assert_eq!(41,   snapshot.maximum_cancelled_jobs());
    assert_eq!(42,   snapshot.current_cancelled_jobs());
    assert_eq!(42.5, snapshot.average_cancelled_jobs());
    assert_eq!(43,   snapshot.total_cancelled_jobs());
    assert_eq!(50,   snapshot.total_executed_jobs());

    assert_eq!(61,   snapshot.maximum_job_wait_time());
    assert_eq!(62,   snapshot.current_job_wait_time());
    assert_eq!(62.5, snapshot.average_job_wait_time());
    assert_eq!(71,   snapshot.maximum_job_execute_time());
    assert_eq!(72,   snapshot.current_job_execute_time());
    assert_eq!(72.5, snapshot.average_job_execute_time());
    assert_eq!(80,   snapshot.total_executed_tasks());

    assert_eq!(300,  snapshot.total_idle_time());
    assert_eq!(90,   snapshot.current_idle_time());

    assert_eq!(16,    snapshot.total_cpus());
    assert_eq!(0.25,  snapshot.current_cpu_load());
    assert_eq!(0.5,   snapshot.average_cpu_load());
    assert_eq!(0.125, snapshot.current_gc_cpu_load());

    assert_eq!(101, snapshot.heap_memory_initialized());
    assert_eq!(102, snapshot.heap_memory_used());
    assert_eq!(103, snapshot.heap_memory_committed());
    assert_eq!(104, snapshot.heap_memory_maximum());
    assert_eq!(105, snapshot.heap_memory_total());
    assert_eq!(201, snapshot.non_heap_memory_initialized());
    assert_eq!(202, snapshot.non_heap_memory_used());
    assert_eq!(203, snapshot.non_heap_memory_committed());
    assert_eq!(204, snapshot.non_heap_memory_maximum());
    assert_eq!(205, snapshot.non_heap_memory_total());

    assert_eq!(1000,         snapshot.uptime());
    assert_eq!(start(),      snapshot.start_time());
    assert_eq!(node_start(), snapshot.node_start_time());

    assert_eq!(301, snapshot.current_thread_count());
    assert_eq!(302, snapshot.maximum_thread_count());
    assert_eq!(303, snapshot.total_started_thread_count());
    assert_eq!(304, snapshot.current_daemon_thread_count());

    assert_eq!(400, snapshot.last_data_version());

    assert_eq!(501, snapshot.sent_messages_count());
    assert_eq!(502, snapshot.sent_bytes_count());
    assert_eq!(503, snapshot.received_messages_count());
    assert_eq!(504, snapshot.received_bytes_count());
    assert_eq!(505, snapshot.outbound_messages_queue_size());
    assert_eq!(600, snapshot.total_nodes());

    snapshot.print();

    Ok(())
}

#[test]
fn decode_consumes_fixed_length() -> Result<()> {
    let mut vec = record();
    vec.extend_from_slice(&[0xAA; 7]);

    let mut reader = Reader::new(&vec);
    Snapshot::decode(&mut reader)?;

    assert_eq!(WIRE_LEN, reader.position());
    assert_eq!(7, reader.remaining());

    Ok(())
}

#[test]
fn decode_truncated() {
    let vec = record();

    for len in [0, 4, 31, WIRE_LEN - 1].iter() {
        let mut reader = Reader::new(&vec[..*len]);
        let result = Snapshot::decode(&mut reader);

        match result {
            Err(Error::Truncated { .. }) => (),
            other => panic!("length {}: expected truncation, got {:?}", len, other),
        }
    }
}

#[test]
fn derived_fields() -> Result<()> {
    let vec = record_with(1000, 300);
    let mut reader = Reader::new(&vec);
    let snapshot = Snapshot::decode(&mut reader)?;

    assert!((snapshot.idle_time_percentage() - 0.3).abs() < 1e-6);
    assert!((snapshot.busy_time_percentage() - 0.7).abs() < 1e-6);
    assert_eq!(700, snapshot.total_busy_time());

    Ok(())
}

#[test]
fn zero_uptime_passes_through() -> Result<()> {
    let vec = record_with(0, 0);
    let mut reader = Reader::new(&vec);
    let snapshot = Snapshot::decode(&mut reader)?;

    assert!(snapshot.idle_time_percentage().is_nan());
    assert!(!snapshot.busy_time_percentage().is_finite());
    assert_eq!(0, snapshot.total_busy_time());

    let vec = record_with(0, 300);
    let mut reader = Reader::new(&vec);
    let snapshot = Snapshot::decode(&mut reader)?;

    assert!(snapshot.idle_time_percentage().is_infinite());

    Ok(())
}

#[test]
fn shared_across_threads() -> Result<()> {
    let vec = record();
    let mut reader = Reader::new(&vec);
    let metrics = Metrics::decode(&mut reader)?;

    let threads = (0..4).map(|_| {
        let metrics = metrics.clone();
        thread::spawn(move || {
            let snapshot = metrics.snapshot();
            (snapshot.total_executed_jobs(), snapshot.uptime())
        })
    }).collect::<Vec<_>>();

    for thread in threads {
        assert_eq!((50, 1000), thread.join().unwrap());
    }

    assert_eq!(600, metrics.snapshot().total_nodes());

    Ok(())
}

#[test]
fn serialize_json() -> Result<()> {
    let vec = record();
    let mut reader = Reader::new(&vec);
    let snapshot = Snapshot::decode(&mut reader)?;

    let json = serde_json::to_value(&snapshot)?;

    assert_eq!(50,   json["total_executed_jobs"]);
    assert_eq!(1000, json["uptime"]);
    assert_eq!(0.25, json["current_cpu_load"]);
    assert_eq!(600,  json["total_nodes"]);

    Ok(())
}

fn record() -> Vec<u8> {
    record_with(1000, 300)
}

fn record_with(uptime: i64, idle: i64) -> Vec<u8> {
    let mut w = Writer::new();

    w.write_i64(1_650_000_000_123);
    w.write_timestamp(last_update());

    // active / waiting / rejected / cancelled job counters
    w.write_i32(11);
    w.write_i32(12);
    w.write_f32(12.5);
    w.write_i32(21);
    w.write_i32(22);
    w.write_f32(22.5);
    w.write_i32(31);
    w.write_i32(32);
    w.write_f32(32.5);
    w.write_i32(33);
    w.write_i32(41);
    w.write_i32(42);
    w.write_f32(42.5);
    w.write_i32(43);
    w.write_i32(50);

    // job wait and execute times
    w.write_i64(61);
    w.write_i64(62);
    w.write_f64(62.5);
    w.write_i64(71);
    w.write_i64(72);
    w.write_f64(72.5);
    w.write_i32(80);

    w.write_i64(idle);
    w.write_i64(90);

    // cpu
    w.write_i32(16);
    w.write_f64(0.25);
    w.write_f64(0.5);
    w.write_f64(0.125);

    // heap and non-heap memory
    w.write_i64(101);
    w.write_i64(102);
    w.write_i64(103);
    w.write_i64(104);
    w.write_i64(105);
    w.write_i64(201);
    w.write_i64(202);
    w.write_i64(203);
    w.write_i64(204);
    w.write_i64(205);

    w.write_i64(uptime);
    w.write_timestamp(start());
    w.write_timestamp(node_start());

    // threads
    w.write_i32(301);
    w.write_i32(302);
    w.write_i64(303);
    w.write_i32(304);

    w.write_i64(400);

    // messaging
    w.write_i32(501);
    w.write_i64(502);
    w.write_i32(503);
    w.write_i64(504);
    w.write_i32(505);

    w.write_i32(600);

    w.into_vec()
}

fn last_update() -> DateTime<Utc> {
    Utc.timestamp_millis(1_650_000_000_123)
}

fn start() -> DateTime<Utc> {
    Utc.timestamp(1_600_000_000, 0)
}

fn node_start() -> DateTime<Utc> {
    Utc.timestamp(1_600_000_100, 250_000)
}
