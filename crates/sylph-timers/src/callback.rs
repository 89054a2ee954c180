use std::fmt;
use std::rc::Rc;

struct Callback {
    run: Box<dyn Fn()>,
}

/// Opaque, reference-counted handle to a host-supplied callback.
///
/// Cloning takes another strong claim on the callback; the callback stays alive as long as any
/// claim does. Equality is identity: two handles compare equal only when they originate from the
/// same [`CallbackHandle::new`] call, which is what lets a handle double as a cancellation token.
#[derive(Clone)]
pub struct CallbackHandle {
    inner: Rc<Callback>,
}

impl CallbackHandle {
    pub fn new(run: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(Callback { run: Box::new(run) }),
        }
    }

    /// Runs the underlying callback.
    ///
    /// Intended for the host's callback-execution facility; the expiration scheduler itself never
    /// calls this.
    pub fn run(&self) {
        (self.inner.run)()
    }

    /// Number of live claims on the callback, counting this one.
    pub fn claims(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl PartialEq for CallbackHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for CallbackHandle {}

impl fmt::Debug for CallbackHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CallbackHandle")
            .field(&Rc::as_ptr(&self.inner))
            .finish()
    }
}
