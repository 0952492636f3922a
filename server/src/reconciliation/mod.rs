mod reconciler;
pub(crate) use reconciler::Reconciler;
