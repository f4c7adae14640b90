// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup import on a dedicated thread.

use std::thread::{self, JoinHandle, ThreadId};

use crate::markup::{import_markup, MarkupOptions};
use crate::{Error, RichText};

/// Settings for [`MarkupService`].
#[derive(Clone, Debug, PartialEq)]
pub struct MarkupServiceOptions {
    /// The name of the importer thread.
    pub thread_name: String,
    /// How imported markup is styled.
    pub markup: MarkupOptions,
}

impl Default for MarkupServiceOptions {
    fn default() -> Self {
        Self {
            thread_name: "markup-importer".into(),
            markup: MarkupOptions::default(),
        }
    }
}

type Callback = Box<dyn FnOnce(Option<RichText>) + Send + 'static>;

enum Reply {
    Blocking(flume::Sender<Option<RichText>>),
    Callback(Callback),
}

struct Job {
    markup: String,
    reply: Reply,
}

/// Owns the thread markup is imported on.
///
/// Requests are handled one at a time, in the order they were made. Dropping the service
/// lets queued requests finish, then joins the thread.
///
/// Calling [`import_blocking`](Self::import_blocking) from code the importer thread is itself
/// waiting on deadlocks.
///
/// ```
/// use rich_text::MarkupService;
///
/// let service = MarkupService::new().unwrap();
/// let text = service.import_blocking("<i>slanted</i>").unwrap().unwrap();
/// assert!(text.is_font_italic_at(0).0);
/// ```
pub struct MarkupService {
    sender: Option<flume::Sender<Job>>,
    thread: Option<JoinHandle<()>>,
    owner: ThreadId,
    options: MarkupOptions,
}

impl MarkupService {
    /// Start an importer thread with default options.
    pub fn new() -> Result<Self, Error> {
        Self::with_options(MarkupServiceOptions::default())
    }

    /// Start an importer thread.
    pub fn with_options(options: MarkupServiceOptions) -> Result<Self, Error> {
        let (sender, receiver) = flume::unbounded::<Job>();
        let markup = options.markup.clone();
        let thread = thread::Builder::new()
            .name(options.thread_name.clone())
            .spawn(move || run(&receiver, &markup))
            .map_err(Error::Spawn)?;
        let owner = thread.thread().id();
        tracing::debug!(thread = %options.thread_name, "markup importer started");
        Ok(Self {
            sender: Some(sender),
            thread: Some(thread),
            owner,
            options: options.markup,
        })
    }

    /// Returns `true` when called on the importer thread.
    pub fn is_importer_thread(&self) -> bool {
        thread::current().id() == self.owner
    }

    /// Import `markup` and wait for the result.
    ///
    /// On the importer thread the markup is parsed inline; anywhere else the request is
    /// queued and the caller blocks until it is answered. The inner `None` means the markup
    /// was not well formed.
    pub fn import_blocking(&self, markup: &str) -> Result<Option<RichText>, Error> {
        if self.is_importer_thread() {
            return Ok(import_markup(markup, &self.options));
        }
        let (reply, result) = flume::bounded(1);
        self.send(Job {
            markup: markup.to_owned(),
            reply: Reply::Blocking(reply),
        })?;
        result.recv().map_err(|_| Error::ServiceClosed)
    }

    /// Queue `markup` for import and return immediately.
    ///
    /// `callback` runs on the importer thread with the result.
    pub fn import_async<F>(&self, markup: impl Into<String>, callback: F) -> Result<(), Error>
    where
        F: FnOnce(Option<RichText>) + Send + 'static,
    {
        self.send(Job {
            markup: markup.into(),
            reply: Reply::Callback(Box::new(callback)),
        })
    }

    fn send(&self, job: Job) -> Result<(), Error> {
        let sender = self.sender.as_ref().ok_or(Error::ServiceClosed)?;
        tracing::trace!(len = job.markup.len(), "queueing markup import");
        sender.send(job).map_err(|_| Error::ServiceClosed)
    }
}

impl core::fmt::Debug for MarkupService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MarkupService")
            .field("owner", &self.owner)
            .field("open", &self.sender.is_some())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Drop for MarkupService {
    fn drop(&mut self) {
        self.sender = None;
        let Some(thread) = self.thread.take() else {
            return;
        };
        // The thread exits on its own once its queue drains.
        if self.is_importer_thread() {
            return;
        }
        if thread.join().is_err() {
            tracing::warn!("markup importer thread panicked");
        }
    }
}

fn run(receiver: &flume::Receiver<Job>, options: &MarkupOptions) {
    for job in receiver.iter() {
        tracing::trace!(len = job.markup.len(), "importing markup");
        let text = import_markup(&job.markup, options);
        match job.reply {
            Reply::Blocking(reply) => {
                // The caller may have given up waiting.
                let _ = reply.send(text);
            }
            Reply::Callback(callback) => callback(text),
        }
    }
    tracing::debug!("markup importer stopped");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{MarkupService, MarkupServiceOptions};

    #[test]
    fn blocking_import_from_another_thread() {
        let service = MarkupService::new().unwrap();
        assert!(!service.is_importer_thread());
        let text = service.import_blocking("<u>under</u>").unwrap().unwrap();
        assert_eq!(text.as_str(), "under");
        assert!(text.is_text_underlined_at(0).0);
        assert_eq!(service.import_blocking("<oops>").unwrap(), None);
    }

    #[test]
    fn async_import_runs_on_importer_thread() {
        let options = MarkupServiceOptions {
            thread_name: "importer-under-test".into(),
            ..MarkupServiceOptions::default()
        };
        let service = MarkupService::with_options(options).unwrap();
        let (tx, rx) = flume::bounded(1);
        service
            .import_async("<b>Hi</b>", move |text| {
                let name = std::thread::current().name().map(str::to_owned);
                tx.send((text, name)).unwrap();
            })
            .unwrap();
        let (text, name) = rx.recv().unwrap();
        let text = text.unwrap();
        assert_eq!(name.as_deref(), Some("importer-under-test"));
        assert_eq!(text.len(), 2);
        assert_eq!(text.is_font_bold_at(0), (true, 0..2));
    }

    #[test]
    fn blocking_import_on_importer_thread_is_inline() {
        let service = Arc::new(MarkupService::new().unwrap());
        let inner = Arc::clone(&service);
        let (tx, rx) = flume::bounded(1);
        service
            .import_async("outer", move |_| {
                let on_importer = inner.is_importer_thread();
                let text = inner.import_blocking("<i>inner</i>");
                tx.send((on_importer, text.map(|t| t.map(|t| t.as_str().to_owned()))))
                    .unwrap();
            })
            .unwrap();
        let (on_importer, text) = rx.recv().unwrap();
        assert!(on_importer);
        assert_eq!(text.unwrap().as_deref(), Some("inner"));
    }

    #[test]
    fn drop_finishes_queued_jobs() {
        let (tx, rx) = flume::unbounded();
        {
            let service = MarkupService::new().unwrap();
            for i in 0..4 {
                let tx = tx.clone();
                service
                    .import_async(format!("job {i}"), move |text| {
                        tx.send(text.map(|t| t.as_str().to_owned())).unwrap();
                    })
                    .unwrap();
            }
        }
        drop(tx);
        let results: Vec<_> = rx.iter().flatten().collect();
        assert_eq!(results, ["job 0", "job 1", "job 2", "job 3"]);
    }
}
