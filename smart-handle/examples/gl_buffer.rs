// SPDX-License-Identifier: Apache-2.0

use env_logger::Env;
use log::info;
use smart_handle::{define_handle, SharedHandle, WeakHandle};
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_BUFFER: AtomicU32 = AtomicU32::new(1);

/// Stand-in for `glGenBuffers`.
fn gl_gen_buffer() -> u32 {
    let id = NEXT_BUFFER.fetch_add(1, Ordering::SeqCst);
    info!("glGenBuffers -> {}", id);
    id
}

/// Stand-in for `glDeleteBuffers`.
fn gl_delete_buffer(id: u32) {
    info!("glDeleteBuffers({})", id);
}

define_handle!(
    /// An owned vertex buffer object.
    #[derive(Debug)]
    VertexBuffer, u32, release: gl_delete_buffer
);

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    info!("Starting handle ownership example");

    {
        let vbo = VertexBuffer::new(gl_gen_buffer());
        info!("Unique buffer {} owned: {}", vbo.get(), vbo.is_owned());
    }

    let shared: SharedHandle<u32> = VertexBuffer::new(gl_gen_buffer()).into_shared();
    let weak = WeakHandle::from(&shared);
    {
        let copy = shared.clone();
        info!("Buffer {} has {} owners", copy.get(), copy.use_count());
    }

    match weak.lock() {
        Some(buffer) => info!("Promoted buffer {}", buffer.get()),
        None => info!("Buffer already released"),
    }

    drop(shared);
    info!("Weak handle to buffer {} is {}", weak.get(), weak.state());
}
