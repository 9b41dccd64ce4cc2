//! Parallel batch codec using a producer-consumer pipeline.
//!
//! Architecture:
//! - Main thread: send one job per input buffer, draining results while the
//!   job channel is full
//! - Worker pool: compress or decompress buffers, each worker with its own
//!   `Compressor`
//! - Main thread: place results into their input slot

use crossbeam::channel::{bounded, Receiver, Sender};

use super::BatchConfig;
use crate::block::{decompress, Compressor};
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug)]
enum Operation {
    Compress,
    Decompress,
}

impl Operation {
    fn apply(self, compressor: &mut Compressor, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Operation::Compress => Ok(compressor.compress(data)),
            Operation::Decompress => decompress(data),
        }
    }
}

/// A single buffer to process
#[derive(Clone, Copy)]
struct Job<'a> {
    /// Index of the buffer in the caller's slice
    job_id: usize,
    data: &'a [u8],
}

/// Result of processing a single buffer
struct Finished {
    job_id: usize,
    data: Vec<u8>,
}

/// Batch compressor that fans independent buffers out to worker threads
pub struct ParallelCompressor {
    config: BatchConfig,
}

impl ParallelCompressor {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    fn effective_threads(&self) -> usize {
        match self.config.num_threads {
            0 => num_cpus::get().clamp(1, 32),
            n => n.clamp(1, 32),
        }
    }

    /// Compress every buffer; output `i` is the stream for `inputs[i]` and is
    /// identical to what [`Compressor::compress`] produces on its own
    pub fn compress_all(&self, inputs: &[&[u8]]) -> Result<Vec<Vec<u8>>> {
        self.run(inputs, Operation::Compress)
    }

    /// Decompress every stream; the first malformed stream aborts the batch
    pub fn decompress_all(&self, inputs: &[&[u8]]) -> Result<Vec<Vec<u8>>> {
        self.run(inputs, Operation::Decompress)
    }

    fn run<'a>(&self, inputs: &[&'a [u8]], op: Operation) -> Result<Vec<Vec<u8>>> {
        let num_threads = self.effective_threads().min(inputs.len());

        log::debug!("{:?}: {} buffers on {} threads", op, inputs.len(), num_threads.max(1));

        // Not worth spinning up workers
        if num_threads <= 1 {
            let mut compressor = Compressor::new();
            return inputs.iter().map(|data| op.apply(&mut compressor, data)).collect();
        }

        // Channel capacity - enough to keep workers busy without excessive memory
        let channel_capacity = num_threads * 4;

        let (job_tx, job_rx): (Sender<Job<'a>>, Receiver<Job<'a>>) = bounded(channel_capacity);
        let (result_tx, result_rx): (Sender<Result<Finished>>, Receiver<Result<Finished>>) =
            bounded(channel_capacity);

        let result = crossbeam::scope(|scope| {
            for _ in 0..num_threads {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();

                scope.spawn(move |_| {
                    worker_thread(job_rx, result_tx, op);
                });
            }

            // Drop our copies of the channels that workers use
            drop(job_rx);
            drop(result_tx);

            dispatch_and_collect(inputs, job_tx, result_rx)
        });

        result.map_err(|_| Error::Internal("Thread panicked".to_string()))?
    }
}

fn dispatch_and_collect<'a>(
    inputs: &[&'a [u8]],
    job_tx: Sender<Job<'a>>,
    result_rx: Receiver<Result<Finished>>,
) -> Result<Vec<Vec<u8>>> {
    let mut slots: Vec<Option<Vec<u8>>> = (0..inputs.len()).map(|_| None).collect();
    let mut received = 0;

    for (job_id, &data) in inputs.iter().enumerate() {
        let job = Job { job_id, data };

        // Send job, draining results as needed to prevent deadlock
        let mut sent = false;
        while !sent {
            crossbeam::channel::select! {
                send(job_tx, job) -> res => {
                    if res.is_err() {
                        return Err(Error::Internal("Workers disconnected".to_string()));
                    }
                    sent = true;
                }
                recv(result_rx) -> res => {
                    let finished = res.map_err(|_| {
                        Error::Internal("Result channel disconnected".to_string())
                    })??;
                    slots[finished.job_id] = Some(finished.data);
                    received += 1;
                }
            }
        }
    }

    // Signal workers we're done
    drop(job_tx);

    while received < inputs.len() {
        let finished = result_rx
            .recv()
            .map_err(|_| Error::Internal("Result channel disconnected".to_string()))??;
        slots[finished.job_id] = Some(finished.data);
        received += 1;
    }

    slots
        .into_iter()
        .map(|slot| slot.ok_or_else(|| Error::Internal("Missing batch result".to_string())))
        .collect()
}

/// Worker thread function: processes buffers until the job channel closes
fn worker_thread(job_rx: Receiver<Job<'_>>, result_tx: Sender<Result<Finished>>, op: Operation) {
    let mut compressor = Compressor::new();

    while let Ok(job) = job_rx.recv() {
        let result =
            op.apply(&mut compressor, job.data).map(|data| Finished { job_id: job.job_id, data });

        if result_tx.send(result).is_err() {
            // Main thread has stopped, exit
            break;
        }
    }
}
