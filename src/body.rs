use futures::Stream;
use hyper::body::{Body, Bytes, Frame, SizeHint};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::{cmp, io};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// Response payload: nothing, a buffered value, or a lazy file stream.
/// The writer drives whichever variant it finds, so serving a large file
/// never materializes it in memory.
pub enum ResponseBody {
    Empty,
    Full(Bytes),
    File(ReaderStream<File>),
}

impl ResponseBody {
    pub fn empty() -> Self {
        ResponseBody::Empty
    }

    pub fn full(bytes: impl Into<Bytes>) -> Self {
        ResponseBody::Full(bytes.into())
    }

    pub fn from_file(file: File) -> Self {
        ResponseBody::File(ReaderStream::with_capacity(file, 64 * 1024))
    }
}

impl Body for ResponseBody {
    type Data = Bytes;
    type Error = io::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        match self.get_mut() {
            ResponseBody::Empty => Poll::Ready(None),
            ResponseBody::Full(bytes) => {
                if bytes.is_empty() {
                    return Poll::Ready(None);
                }

                // windows/linux can't handle write calls bigger than this
                let chunk_size = i32::MAX as usize;
                let bytes_to_read = cmp::min(bytes.len(), chunk_size);
                let read = bytes.split_to(bytes_to_read);

                Poll::Ready(Some(Ok(Frame::data(read))))
            }
            ResponseBody::File(stream) => Pin::new(stream)
                .poll_next(cx)
                .map(|next| next.map(|chunk| chunk.map(Frame::data))),
        }
    }

    fn is_end_stream(&self) -> bool {
        match self {
            ResponseBody::Empty => true,
            ResponseBody::Full(bytes) => bytes.is_empty(),
            ResponseBody::File(_) => false,
        }
    }

    fn size_hint(&self) -> SizeHint {
        match self {
            ResponseBody::Empty => SizeHint::with_exact(0),
            ResponseBody::Full(bytes) => {
                SizeHint::with_exact(u64::try_from(bytes.len()).unwrap())
            }
            ResponseBody::File(_) => SizeHint::default(),
        }
    }
}
