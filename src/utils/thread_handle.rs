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

use std::any::Any;
use std::sync::mpsc::{self, Receiver};
use std::thread::JoinHandle;

use crate::errors::{Error, Result};

/// Owns a spawned thread.
///
/// The closure receives a termination receiver that gets disconnected once
/// the handle is dropped.
#[derive(Debug)]
pub(crate) struct ThreadHandle<T> {
    _thread_termination_sender: mpsc::Sender<()>,
    thread_handle: JoinHandle<Result<T>>,
}

impl<T: Send + 'static> ThreadHandle<T> {
    pub(crate) fn new<F>(f: F) -> Self
    where
        F: FnOnce(Receiver<()>) -> Result<T>,
        F: Send + 'static,
    {
        let (thread_termination_sender, thread_termination_receiver) = mpsc::channel();

        let t: JoinHandle<Result<T>> = std::thread::spawn(move || f(thread_termination_receiver));

        Self {
            _thread_termination_sender: thread_termination_sender,
            thread_handle: t,
        }
    }

    /// Blocks until the thread finishes.
    pub(crate) fn join(self) -> Result<T> {
        match self.thread_handle.join() {
            Ok(r) => r,
            Err(e) => Err(Error::ThreadPanicked(panic_message(e.as_ref()))),
        }
    }
}

/// Extracts the message of a panic payload, if it carries one.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::RecvError;

    use super::*;

    #[test]
    fn terminator_disconnects_on_drop() {
        let (tx, rx) = mpsc::channel();
        let handle = ThreadHandle::new(move |terminator| {
            let _ = terminator.recv();
            tx.send(()).unwrap();
            Ok(())
        });

        drop(handle);
        assert_eq!(rx.recv(), Ok(()));
        assert_eq!(rx.recv().unwrap_err(), RecvError);
    }

    #[test]
    fn finishing_thread() {
        let handle = ThreadHandle::new(move |_terminator| Ok(42));
        assert!(matches!(handle.join(), Ok(42)));
    }

    #[test]
    fn panicking_thread() {
        let handle: ThreadHandle<()> = ThreadHandle::new(move |_terminator| {
            panic!("panic for test");
        });
        let result = handle.join();
        assert!(matches!(result, Err(Error::ThreadPanicked(ref msg)) if msg == "panic for test"));
    }
}
