use bitflags::bitflags;

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct FolioOptions: u64 {
        /// Debug overlay: frame timings, watcher state
        const Debug = 1 << 0;

        /// Keep preferences in memory instead of the settings file
        const NoPersist = 1 << 1;
    }
}
