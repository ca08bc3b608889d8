//! Raw element storage, below the level of element lifetimes.
//!
//! [`RawBuf<T>`] owns a contiguous region sized for a given number of `T`
//! elements and nothing more: it allocates, deallocates, and exchanges
//! regions, but never constructs or destroys a `T`. Tracking which slots
//! hold live values is entirely the caller's job. The crate's
//! [`Seq<T>`][crate::seq::Seq] is that caller.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::NonNull;

#[inline(never)]
#[cold]
fn layout_overflow() -> ! {
    panic!("Storage layout overflow")
}

/// An owned region of uninitialized storage for `cap` elements of `T`.
///
/// All slots are raw memory as far as `RawBuf` is concerned. Dropping a
/// `RawBuf` releases the region without running any element destructor, so
/// the owner must destroy whatever values it constructed in the region
/// first.
///
/// `RawBuf` is not cloneable: a bytewise copy of possibly-uninitialized
/// slots has no meaning, and a deep copy requires knowing which slots are
/// live. Ownership of the region moves with the value, and [`swap`] gives
/// an O(1) exchange between two buffers.
///
/// # Examples
///
/// ```
/// use rawseq::RawBuf;
///
/// let buf: RawBuf<u64> = RawBuf::with_capacity(8);
/// assert_eq!(buf.capacity(), 8);
/// // Dropping the buffer releases the region; no u64 was ever created.
/// ```
///
/// [`swap`]: RawBuf::swap
pub struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// An empty buffer: dangling pointer, zero capacity, no allocation.
    #[inline]
    pub const fn dangling() -> Self {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates storage for exactly `cap` elements, constructing none of
    /// them.
    ///
    /// Requests of zero total size (zero `cap`, or a zero-sized `T`) do not
    /// allocate; the recorded capacity is still `cap`. Panics if the region
    /// size overflows the address space, and reports through
    /// [`alloc::alloc::handle_alloc_error`] if the allocator refuses the
    /// request.
    pub fn with_capacity(cap: usize) -> Self {
        let layout = Layout::array::<T>(cap).unwrap_or_else(|_| layout_overflow());
        if layout.size() == 0 {
            let mut buf = Self::dangling();
            buf.cap = cap;
            return buf;
        }
        // Safety: layout has nonzero size.
        let ptr = unsafe { alloc::alloc::alloc(layout) };
        let ptr = match NonNull::new(ptr as *mut T) {
            Some(ptr) => ptr,
            None => alloc::alloc::handle_alloc_error(layout),
        };
        RawBuf {
            ptr,
            cap,
            _marker: PhantomData,
        }
    }

    /// Base address of the region.
    ///
    /// Dangling (but well-aligned) when the capacity is zero or `T` is
    /// zero-sized.
    #[inline]
    pub fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Number of elements the region can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Exchanges regions with `other` in O(1). No slot is read or written.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.ptr, &mut other.ptr);
        core::mem::swap(&mut self.cap, &mut other.cap);
    }
}

impl<T> Default for RawBuf<T> {
    #[inline]
    fn default() -> Self {
        Self::dangling()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let size = core::mem::size_of::<T>() * self.cap;
        if size == 0 {
            return;
        }
        // Safety: a nonzero size means with_capacity allocated this region
        // with the same layout. The owner has already destroyed any live
        // elements; only the memory is released here.
        unsafe {
            let layout = Layout::from_size_align_unchecked(size, core::mem::align_of::<T>());
            alloc::alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout);
        }
    }
}
