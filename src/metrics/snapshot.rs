use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use crate::wire::{Error, Reader};

/// Fixed byte length of an encoded snapshot record.
pub const WIRE_LEN: usize = 348;

/// Point-in-time runtime metrics for a single cluster node.
///
/// A snapshot is decoded once from a fixed-layout binary record and is
/// read-only for the rest of its life. Decoded values are surfaced as-is;
/// the producer is trusted and nothing is range-checked.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    last_update_millis:           i64,
    last_update_time:             DateTime<Utc>,
    maximum_active_jobs:          i32,
    current_active_jobs:          i32,
    average_active_jobs:          f32,
    maximum_waiting_jobs:         i32,
    current_waiting_jobs:         i32,
    average_waiting_jobs:         f32,
    maximum_rejected_jobs:        i32,
    current_rejected_jobs:        i32,
    average_rejected_jobs:        f32,
    total_rejected_jobs:          i32,
    maximum_cancelled_jobs:       i32,
    current_cancelled_jobs:       i32,
    average_cancelled_jobs:       f32,
    total_cancelled_jobs:         i32,
    total_executed_jobs:          i32,
    maximum_job_wait_time:        i64,
    current_job_wait_time:        i64,
    average_job_wait_time:        f64,
    maximum_job_execute_time:     i64,
    current_job_execute_time:     i64,
    average_job_execute_time:     f64,
    total_executed_tasks:         i32,
    total_idle_time:              i64,
    current_idle_time:            i64,
    total_cpus:                   i32,
    current_cpu_load:             f64,
    average_cpu_load:             f64,
    current_gc_cpu_load:          f64,
    heap_memory_initialized:      i64,
    heap_memory_used:             i64,
    heap_memory_committed:        i64,
    heap_memory_maximum:          i64,
    heap_memory_total:            i64,
    non_heap_memory_initialized:  i64,
    non_heap_memory_used:         i64,
    non_heap_memory_committed:    i64,
    non_heap_memory_maximum:      i64,
    non_heap_memory_total:        i64,
    uptime:                       i64,
    start_time:                   DateTime<Utc>,
    node_start_time:              DateTime<Utc>,
    current_thread_count:         i32,
    maximum_thread_count:         i32,
    total_started_thread_count:   i64,
    current_daemon_thread_count:  i32,
    last_data_version:            i64,
    sent_messages_count:          i32,
    sent_bytes_count:             i64,
    received_messages_count:      i32,
    received_bytes_count:         i64,
    outbound_messages_queue_size: i32,
    total_nodes:                  i32,
}

impl Snapshot {
    /// Decode one record from the reader, consuming exactly `WIRE_LEN`
    /// bytes. Field order is fixed and must match the producer; any
    /// short read fails the whole decode and yields no snapshot.
    pub fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        Ok(Self {
            last_update_millis:           reader.read_i64()?,
            last_update_time:             reader.read_timestamp()?,
            maximum_active_jobs:          reader.read_i32()?,
            current_active_jobs:          reader.read_i32()?,
            average_active_jobs:          reader.read_f32()?,
            maximum_waiting_jobs:         reader.read_i32()?,
            current_waiting_jobs:         reader.read_i32()?,
            average_waiting_jobs:         reader.read_f32()?,
            maximum_rejected_jobs:        reader.read_i32()?,
            current_rejected_jobs:        reader.read_i32()?,
            average_rejected_jobs:        reader.read_f32()?,
            total_rejected_jobs:          reader.read_i32()?,
            maximum_cancelled_jobs:       reader.read_i32()?,
            current_cancelled_jobs:       reader.read_i32()?,
            average_cancelled_jobs:       reader.read_f32()?,
            total_cancelled_jobs:         reader.read_i32()?,
            total_executed_jobs:          reader.read_i32()?,
            maximum_job_wait_time:        reader.read_i64()?,
            current_job_wait_time:        reader.read_i64()?,
            average_job_wait_time:        reader.read_f64()?,
            maximum_job_execute_time:     reader.read_i64()?,
            current_job_execute_time:     reader.read_i64()?,
            average_job_execute_time:     reader.read_f64()?,
            total_executed_tasks:         reader.read_i32()?,
            total_idle_time:              reader.read_i64()?,
            current_idle_time:            reader.read_i64()?,
            total_cpus:                   reader.read_i32()?,
            current_cpu_load:             reader.read_f64()?,
            average_cpu_load:             reader.read_f64()?,
            current_gc_cpu_load:          reader.read_f64()?,
            heap_memory_initialized:      reader.read_i64()?,
            heap_memory_used:             reader.read_i64()?,
            heap_memory_committed:        reader.read_i64()?,
            heap_memory_maximum:          reader.read_i64()?,
            heap_memory_total:            reader.read_i64()?,
            non_heap_memory_initialized:  reader.read_i64()?,
            non_heap_memory_used:         reader.read_i64()?,
            non_heap_memory_committed:    reader.read_i64()?,
            non_heap_memory_maximum:      reader.read_i64()?,
            non_heap_memory_total:        reader.read_i64()?,
            uptime:                       reader.read_i64()?,
            start_time:                   reader.read_timestamp()?,
            node_start_time:              reader.read_timestamp()?,
            current_thread_count:         reader.read_i32()?,
            maximum_thread_count:         reader.read_i32()?,
            total_started_thread_count:   reader.read_i64()?,
            current_daemon_thread_count:  reader.read_i32()?,
            last_data_version:            reader.read_i64()?,
            sent_messages_count:          reader.read_i32()?,
            sent_bytes_count:             reader.read_i64()?,
            received_messages_count:      reader.read_i32()?,
            received_bytes_count:         reader.read_i64()?,
            outbound_messages_queue_size: reader.read_i32()?,
            total_nodes:                  reader.read_i32()?,
        })
    }

    /// Raw epoch milliseconds backing `last_update_time`, kept for cheap
    /// staleness comparisons.
    pub fn last_update_millis(&self) -> i64 {
        self.last_update_millis
    }

    pub fn last_update_time(&self) -> DateTime<Utc> {
        self.last_update_time
    }

    pub fn maximum_active_jobs(&self) -> i32 {
        self.maximum_active_jobs
    }

    pub fn current_active_jobs(&self) -> i32 {
        self.current_active_jobs
    }

    pub fn average_active_jobs(&self) -> f32 {
        self.average_active_jobs
    }

    pub fn maximum_waiting_jobs(&self) -> i32 {
        self.maximum_waiting_jobs
    }

    pub fn current_waiting_jobs(&self) -> i32 {
        self.current_waiting_jobs
    }

    pub fn average_waiting_jobs(&self) -> f32 {
        self.average_waiting_jobs
    }

    /// Jobs rejected by the most recent collision resolution round.
    pub fn current_rejected_jobs(&self) -> i32 {
        self.current_rejected_jobs
    }

    pub fn maximum_rejected_jobs(&self) -> i32 {
        self.maximum_rejected_jobs
    }

    pub fn average_rejected_jobs(&self) -> f32 {
        self.average_rejected_jobs
    }

    pub fn total_rejected_jobs(&self) -> i32 {
        self.total_rejected_jobs
    }

    pub fn maximum_cancelled_jobs(&self) -> i32 {
        self.maximum_cancelled_jobs
    }

    pub fn current_cancelled_jobs(&self) -> i32 {
        self.current_cancelled_jobs
    }

    pub fn average_cancelled_jobs(&self) -> f32 {
        self.average_cancelled_jobs
    }

    pub fn total_cancelled_jobs(&self) -> i32 {
        self.total_cancelled_jobs
    }

    pub fn total_executed_jobs(&self) -> i32 {
        self.total_executed_jobs
    }

    pub fn total_executed_tasks(&self) -> i32 {
        self.total_executed_tasks
    }

    /// Job wait times in milliseconds.
    pub fn maximum_job_wait_time(&self) -> i64 {
        self.maximum_job_wait_time
    }

    pub fn current_job_wait_time(&self) -> i64 {
        self.current_job_wait_time
    }

    pub fn average_job_wait_time(&self) -> f64 {
        self.average_job_wait_time
    }

    /// Job execute times in milliseconds.
    pub fn maximum_job_execute_time(&self) -> i64 {
        self.maximum_job_execute_time
    }

    pub fn current_job_execute_time(&self) -> i64 {
        self.current_job_execute_time
    }

    pub fn average_job_execute_time(&self) -> f64 {
        self.average_job_execute_time
    }

    pub fn total_idle_time(&self) -> i64 {
        self.total_idle_time
    }

    /// Time spent idling since the last executed job, in milliseconds.
    pub fn current_idle_time(&self) -> i64 {
        self.current_idle_time
    }

    /// Total time spent executing jobs, in milliseconds.
    pub fn total_busy_time(&self) -> i64 {
        self.uptime.wrapping_sub(self.total_idle_time)
    }

    /// Fraction of uptime spent idling. With zero uptime the division is
    /// deliberately unguarded and yields a non-finite value.
    pub fn idle_time_percentage(&self) -> f32 {
        self.total_idle_time as f32 / self.uptime as f32
    }

    /// Fraction of uptime spent executing jobs.
    pub fn busy_time_percentage(&self) -> f32 {
        1.0 - self.idle_time_percentage()
    }

    pub fn total_cpus(&self) -> i32 {
        self.total_cpus
    }

    /// CPU usage in the [0, 1] range.
    pub fn current_cpu_load(&self) -> f64 {
        self.current_cpu_load
    }

    /// CPU load averaged over the metrics history kept by the node.
    pub fn average_cpu_load(&self) -> f64 {
        self.average_cpu_load
    }

    /// Time spent in garbage collection since the last update.
    pub fn current_gc_cpu_load(&self) -> f64 {
        self.current_gc_cpu_load
    }

    pub fn heap_memory_initialized(&self) -> i64 {
        self.heap_memory_initialized
    }

    pub fn heap_memory_used(&self) -> i64 {
        self.heap_memory_used
    }

    pub fn heap_memory_committed(&self) -> i64 {
        self.heap_memory_committed
    }

    pub fn heap_memory_maximum(&self) -> i64 {
        self.heap_memory_maximum
    }

    pub fn heap_memory_total(&self) -> i64 {
        self.heap_memory_total
    }

    pub fn non_heap_memory_initialized(&self) -> i64 {
        self.non_heap_memory_initialized
    }

    pub fn non_heap_memory_used(&self) -> i64 {
        self.non_heap_memory_used
    }

    pub fn non_heap_memory_committed(&self) -> i64 {
        self.non_heap_memory_committed
    }

    pub fn non_heap_memory_maximum(&self) -> i64 {
        self.non_heap_memory_maximum
    }

    pub fn non_heap_memory_total(&self) -> i64 {
        self.non_heap_memory_total
    }

    /// Node process uptime in milliseconds.
    pub fn uptime(&self) -> i64 {
        self.uptime
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn node_start_time(&self) -> DateTime<Utc> {
        self.node_start_time
    }

    pub fn current_thread_count(&self) -> i32 {
        self.current_thread_count
    }

    pub fn maximum_thread_count(&self) -> i32 {
        self.maximum_thread_count
    }

    pub fn total_started_thread_count(&self) -> i64 {
        self.total_started_thread_count
    }

    pub fn current_daemon_thread_count(&self) -> i32 {
        self.current_daemon_thread_count
    }

    /// Incremental version assigned to the latest data operation.
    pub fn last_data_version(&self) -> i64 {
        self.last_data_version
    }

    pub fn sent_messages_count(&self) -> i32 {
        self.sent_messages_count
    }

    pub fn sent_bytes_count(&self) -> i64 {
        self.sent_bytes_count
    }

    pub fn received_messages_count(&self) -> i32 {
        self.received_messages_count
    }

    pub fn received_bytes_count(&self) -> i64 {
        self.received_bytes_count
    }

    pub fn outbound_messages_queue_size(&self) -> i32 {
        self.outbound_messages_queue_size
    }

    pub fn total_nodes(&self) -> i32 {
        self.total_nodes
    }

    /// Log a human-readable summary of the snapshot.
    pub fn print(&self) {
        let jobs = [
            self.current_active_jobs,
            self.current_waiting_jobs,
            self.current_rejected_jobs,
            self.current_cancelled_jobs,
        ].iter().map(i32::to_string).collect::<Vec<_>>();

        info!("node metrics at {}", self.last_update_time);
        info!("jobs active / waiting / rejected / cancelled: {}", jobs.join(" / "));
        info!("executed {} jobs, {} tasks", self.total_executed_jobs, self.total_executed_tasks);
        info!("uptime {}ms, busy {}ms, idle {}ms", self.uptime, self.total_busy_time(), self.total_idle_time);
        info!("cpu load {:.2}, gc load {:.2}, {} cpus", self.current_cpu_load, self.current_gc_cpu_load, self.total_cpus);
        info!("heap used {} of {} bytes, non-heap used {} of {} bytes",
            self.heap_memory_used,     self.heap_memory_committed,
            self.non_heap_memory_used, self.non_heap_memory_committed);
        info!("threads {} live, {} daemon, {} started",
            self.current_thread_count,
            self.current_daemon_thread_count,
            self.total_started_thread_count);
        info!("sent {} msgs / {} bytes, received {} msgs / {} bytes, {} queued",
            self.sent_messages_count,     self.sent_bytes_count,
            self.received_messages_count, self.received_bytes_count,
            self.outbound_messages_queue_size);
    }
}
