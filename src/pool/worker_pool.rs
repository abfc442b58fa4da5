// (C) Copyright IBM Corp. 2025.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use log::{debug, warn};

use crate::errors::{Error, Result};
use crate::utils::{panic_message, ThreadHandle};

type Job = Box<dyn FnOnce() + Send + 'static>;

enum Message {
    NewJob(Job),
    Terminate,
}

/// Fixed-size pool of worker threads pulling jobs from a shared queue.
///
/// Dropping the pool waits for every queued job to run and then joins the
/// workers.
pub struct WorkerPool {
    workers: Vec<ThreadHandle<()>>,
    sender: Sender<Message>,
}

impl WorkerPool {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidOption(
                "the worker pool needs at least one thread".to_string(),
            ));
        }

        let (sender, receiver) = mpsc::channel();
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..size)
            .map(|id| {
                let receiver = Arc::clone(&receiver);
                ThreadHandle::new(move |_terminator| run_worker(id, receiver))
            })
            .collect();

        debug!("Started worker pool with {size} threads");
        Ok(Self { workers, sender })
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    pub fn execute<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.sender
            .send(Message::NewJob(Box::new(f)))
            .map_err(|_| Error::PoolShutDown)
    }
}

fn run_worker(id: usize, receiver: Arc<Mutex<Receiver<Message>>>) -> Result<()> {
    loop {
        // The guard is dropped before running the job so other workers can
        // keep pulling from the queue.
        let message = receiver.lock()?.recv();
        match message {
            Ok(Message::NewJob(job)) => {
                if let Err(e) = catch_unwind(AssertUnwindSafe(job)) {
                    warn!("Worker {id}: job panicked: {}", panic_message(e.as_ref()));
                }
            }
            Ok(Message::Terminate) | Err(_) => break,
        }
    }
    debug!("Worker {id} terminated");
    Ok(())
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        for _ in &self.workers {
            if self.sender.send(Message::Terminate).is_err() {
                break;
            }
        }

        for worker in self.workers.drain(..) {
            if let Err(e) = worker.join() {
                warn!("Worker did not shut down cleanly: {e}");
            }
        }
    }
}
