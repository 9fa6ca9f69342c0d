//! Name tables for the UNIX syscall and Mach trap tables, indexed by number.
//! Slots that were retired keep a placeholder of the form `"<number>  old <name>"`.

/// Number of `sysent` records decoded.
pub const SYSCALL_COUNT: usize = 443;

/// Number of `mach_trap_table` records decoded.
pub const MACH_TRAP_COUNT: usize = 128;

/// Name of the placeholder handler for unimplemented Mach traps.
pub const KERN_INVALID: &str = "kern_invalid";

pub static SYSCALL_NAMES: [&str; SYSCALL_COUNT] = [
    "syscall",
    "exit",
    "fork",
    "read",
    "write",
    "open",
    "close",
    "wait4",
    "8  old creat",
    "link",
    "unlink",
    "11  old execv",
    "chdir",
    "fchdir",
    "mknod",
    "chmod",
    "chown",
    "17  old break",
    "getfsstat",
    "19  old lseek",
    "getpid",
    "21  old mount",
    "22  old umount",
    "setuid",
    "getuid",
    "geteuid",
    "ptrace",
    "recvmsg",
    "sendmsg",
    "recvfrom",
    "accept",
    "getpeername",
    "getsockname",
    "access",
    "chflags",
    "fchflags",
    "sync",
    "kill",
    "38  old stat",
    "getppid",
    "40  old lstat",
    "dup",
    "pipe",
    "getegid",
    "profil",
    "45  old ktrace",
    "sigaction",
    "getgid",
    "sigprocmask",
    "getlogin",
    "setlogin",
    "acct",
    "sigpending",
    "sigaltstack",
    "ioctl",
    "reboot",
    "revoke",
    "symlink",
    "readlink",
    "execve",
    "umask",
    "chroot",
    "62  old fstat",
    "63  used internally , reserved",
    "64  old getpagesize",
    "msync",
    "vfork",
    "67  old vread",
    "68  old vwrite",
    "69  old sbrk",
    "70  old sstk",
    "71  old mmap",
    "72  old vadvise",
    "munmap",
    "mprotect",
    "madvise",
    "76  old vhangup",
    "77  old vlimit",
    "mincore",
    "getgroups",
    "setgroups",
    "getpgrp",
    "setpgid",
    "setitimer",
    "84  old wait",
    "swapon",
    "getitimer",
    "87  old gethostname",
    "88  old sethostname",
    "getdtablesize",
    "dup2",
    "91  old getdopt",
    "fcntl",
    "select",
    "94  old setdopt",
    "fsync",
    "setpriority",
    "socket",
    "connect",
    "99  old accept",
    "getpriority",
    "101  old send",
    "102  old recv",
    "103  old sigreturn",
    "bind",
    "setsockopt",
    "listen",
    "107  old vtimes",
    "108  old sigvec",
    "109  old sigblock",
    "110  old sigsetmask",
    "sigsuspend",
    "112  old sigstack",
    "113  old recvmsg",
    "114  old sendmsg",
    "115  old vtrace",
    "gettimeofday",
    "getrusage",
    "getsockopt",
    "119  old resuba",
    "readv",
    "writev",
    "settimeofday",
    "fchown",
    "fchmod",
    "125  old recvfrom",
    "setreuid",
    "setregid",
    "rename",
    "129  old truncate",
    "130  old ftruncate",
    "flock",
    "mkfifo",
    "sendto",
    "shutdown",
    "socketpair",
    "mkdir",
    "rmdir",
    "utimes",
    "futimes",
    "adjtime",
    "141  old getpeername",
    "gethostuuid",
    "143  old sethostid",
    "144  old getrlimit",
    "145  old setrlimit",
    "146  old killpg",
    "setsid",
    "148  old setquota",
    "149  old qquota",
    "150  old getsockname",
    "getpgid",
    "setprivexec",
    "pread",
    "pwrite",
    "nfssvc",
    "156  old getdirentries",
    "statfs",
    "fstatfs",
    "unmount",
    "160  old async_daemon",
    "getfh",
    "162  old getdomainname",
    "163  old setdomainname",
    "164",
    "quotactl",
    "166  old exportfs",
    "mount",
    "168  old ustat",
    "csops",
    "170  old table",
    "171  old wait3",
    "172  old rpause",
    "waitid",
    "174  old getdents",
    "175  old gc_control",
    "add_profil",
    "177",
    "178",
    "179",
    "kdebug_trace",
    "setgid",
    "setegid",
    "seteuid",
    "sigreturn",
    "chud",
    "186",
    "fdatasync",
    "stat",
    "fstat",
    "lstat",
    "pathconf",
    "fpathconf",
    "193",
    "getrlimit",
    "setrlimit",
    "getdirentries",
    "mmap",
    "198  __syscall",
    "lseek",
    "truncate",
    "ftruncate",
    "__sysctl",
    "mlock",
    "munlock",
    "undelete",
    "ATsocket",
    "ATgetmsg",
    "ATputmsg",
    "ATPsndreq",
    "ATPsndrsp",
    "ATPgetreq",
    "ATPgetrsp",
    "213  Reserved for AppleTalk",
    "214",
    "215",
    "mkcomplex",
    "statv",
    "lstatv",
    "fstatv",
    "getattrlist",
    "setattrlist",
    "getdirentriesattr",
    "exchangedata",
    "224  old checkuseraccess / fsgetpath ( which moved to 427 )",
    "searchfs",
    "delete",
    "copyfile",
    "fgetattrlist",
    "fsetattrlist",
    "poll",
    "watchevent",
    "waitevent",
    "modwatch",
    "getxattr",
    "fgetxattr",
    "setxattr",
    "fsetxattr",
    "removexattr",
    "fremovexattr",
    "listxattr",
    "flistxattr",
    "fsctl",
    "initgroups",
    "posix_spawn",
    "ffsctl",
    "246",
    "nfsclnt",
    "fhopen",
    "249",
    "minherit",
    "semsys",
    "msgsys",
    "shmsys",
    "semctl",
    "semget",
    "semop",
    "257",
    "msgctl",
    "msgget",
    "msgsnd",
    "msgrcv",
    "shmat",
    "shmctl",
    "shmdt",
    "shmget",
    "shm_open",
    "shm_unlink",
    "sem_open",
    "sem_close",
    "sem_unlink",
    "sem_wait",
    "sem_trywait",
    "sem_post",
    "sem_getvalue",
    "sem_init",
    "sem_destroy",
    "open_extended",
    "umask_extended",
    "stat_extended",
    "lstat_extended",
    "fstat_extended",
    "chmod_extended",
    "fchmod_extended",
    "access_extended",
    "settid",
    "gettid",
    "setsgroups",
    "getsgroups",
    "setwgroups",
    "getwgroups",
    "mkfifo_extended",
    "mkdir_extended",
    "identitysvc",
    "shared_region_check_np",
    "shared_region_map_np",
    "vm_pressure_monitor",
    "psynch_rw_longrdlock",
    "psynch_rw_yieldwrlock",
    "psynch_rw_downgrade",
    "psynch_rw_upgrade",
    "psynch_mutexwait",
    "psynch_mutexdrop",
    "psynch_cvbroad",
    "psynch_cvsignal",
    "psynch_cvwait",
    "psynch_rw_rdlock",
    "psynch_rw_wrlock",
    "psynch_rw_unlock",
    "psynch_rw_unlock2",
    "getsid",
    "settid_with_pid",
    "psynch_cvclrprepost",
    "aio_fsync",
    "aio_return",
    "aio_suspend",
    "aio_cancel",
    "aio_error",
    "aio_read",
    "aio_write",
    "lio_listio",
    "321  old __pthread_cond_wait",
    "iopolicysys",
    "process_policy",
    "mlockall",
    "munlockall",
    "326",
    "issetugid",
    "__pthread_kill",
    "__pthread_sigmask",
    "__sigwait",
    "__disable_threadsignal",
    "__pthread_markcancel",
    "__pthread_canceled",
    "__semwait_signal",
    "335  old utrace",
    "proc_info",
    "sendfile",
    "stat64",
    "fstat64",
    "lstat64",
    "stat64_extended",
    "lstat64_extended",
    "fstat64_extended",
    "getdirentries64",
    "statfs64",
    "fstatfs64",
    "getfsstat64",
    "__pthread_chdir",
    "__pthread_fchdir",
    "audit",
    "auditon",
    "352",
    "getauid",
    "setauid",
    "getaudit",
    "setaudit",
    "getaudit_addr",
    "setaudit_addr",
    "auditctl",
    "bsdthread_create",
    "bsdthread_terminate",
    "kqueue",
    "kevent",
    "lchown",
    "stack_snapshot",
    "bsdthread_register",
    "workq_open",
    "workq_kernreturn",
    "kevent64",
    "__old_semwait_signal",
    "__old_semwait_signal_nocancel",
    "thread_selfid",
    "ledger",
    "374",
    "375",
    "376",
    "377",
    "378",
    "379",
    "__mac_execve",
    "__mac_syscall",
    "__mac_get_file",
    "__mac_set_file",
    "__mac_get_link",
    "__mac_set_link",
    "__mac_get_proc",
    "__mac_set_proc",
    "__mac_get_fd",
    "__mac_set_fd",
    "__mac_get_pid",
    "__mac_get_lcid",
    "__mac_get_lctx",
    "__mac_set_lctx",
    "setlcid",
    "getlcid",
    "read_nocancel",
    "write_nocancel",
    "open_nocancel",
    "close_nocancel",
    "wait4_nocancel",
    "recvmsg_nocancel",
    "sendmsg_nocancel",
    "recvfrom_nocancel",
    "accept_nocancel",
    "msync_nocancel",
    "fcntl_nocancel",
    "select_nocancel",
    "fsync_nocancel",
    "connect_nocancel",
    "sigsuspend_nocancel",
    "readv_nocancel",
    "writev_nocancel",
    "sendto_nocancel",
    "pread_nocancel",
    "pwrite_nocancel",
    "waitid_nocancel",
    "poll_nocancel",
    "msgsnd_nocancel",
    "msgrcv_nocancel",
    "sem_wait_nocancel",
    "aio_suspend_nocancel",
    "__sigwait_nocancel",
    "__semwait_signal_nocancel",
    "__mac_mount",
    "__mac_get_mount",
    "__mac_getfsstat",
    "fsgetpath",
    "audit_session_self",
    "audit_session_join",
    "fileport_makeport",
    "fileport_makefd",
    "audit_session_port",
    "pid_suspend",
    "pid_resume",
    "pid_hibernate",
    "pid_shutdown_sockets",
    "437  old shared_region_slide_np",
    "shared_region_map_and_slide_np",
    "kas_info",
    "memorystatus_control",
    "guarded_open_np",
    "guarded_close_np",
];

pub static MACH_TRAP_NAMES: [&str; MACH_TRAP_COUNT] = [
    KERN_INVALID, // 0
    KERN_INVALID, // 1
    KERN_INVALID, // 2
    KERN_INVALID, // 3
    KERN_INVALID, // 4
    KERN_INVALID, // 5
    KERN_INVALID, // 6
    KERN_INVALID, // 7
    KERN_INVALID, // 8
    KERN_INVALID, // 9
    "_kernelrpc_mach_vm_allocate_trap", // 10
    "_kernelrpc_vm_allocate_trap", // 11
    "_kernelrpc_mach_vm_deallocate_trap", // 12
    "_kernelrpc_vm_deallocate_trap", // 13
    "_kernelrpc_mach_vm_protect_trap", // 14
    "_kernelrpc_vm_protect_trap", // 15
    "_kernelrpc_mach_port_allocate_trap", // 16
    "_kernelrpc_mach_port_destroy_trap", // 17
    "_kernelrpc_mach_port_deallocate_trap", // 18
    "_kernelrpc_mach_port_mod_refs_trap", // 19
    "_kernelrpc_mach_port_move_member_trap", // 20
    "_kernelrpc_mach_port_insert_right_trap", // 21
    "_kernelrpc_mach_port_insert_member_trap", // 22
    "_kernelrpc_mach_port_extract_member_trap", // 23
    KERN_INVALID, // 24
    KERN_INVALID, // 25
    "mach_reply_port", // 26
    "thread_self_trap", // 27
    "task_self_trap", // 28
    "host_self_trap", // 29
    KERN_INVALID, // 30
    "mach_msg_trap", // 31
    "mach_msg_overwrite_trap", // 32
    "semaphore_signal_trap", // 33
    "semaphore_signal_all_trap", // 34
    "semaphore_signal_thread_trap", // 35
    "semaphore_wait_trap", // 36
    "semaphore_wait_signal_trap", // 37
    "semaphore_timedwait_trap", // 38
    "semaphore_timedwait_signal_trap", // 39
    KERN_INVALID, // 40
    KERN_INVALID, // 41
    KERN_INVALID, // 42
    "map_fd", // 43
    "task_name_for_pid", // 44
    "task_for_pid", // 45
    "pid_for_task", // 46
    KERN_INVALID, // 47
    "macx_swapon", // 48
    "macx_swapoff", // 49
    KERN_INVALID, // 50
    "macx_triggers", // 51
    "macx_backing_store_suspend", // 52
    "macx_backing_store_recovery", // 53
    KERN_INVALID, // 54
    KERN_INVALID, // 55
    KERN_INVALID, // 56
    KERN_INVALID, // 57
    "pfz_exit", // 58
    "swtch_pri", // 59
    "swtch", // 60
    "thread_switch", // 61
    "clock_sleep_trap", // 62
    KERN_INVALID, // 63
    KERN_INVALID, // 64
    KERN_INVALID, // 65
    KERN_INVALID, // 66
    KERN_INVALID, // 67
    KERN_INVALID, // 68
    KERN_INVALID, // 69
    KERN_INVALID, // 70
    KERN_INVALID, // 71
    KERN_INVALID, // 72
    KERN_INVALID, // 73
    KERN_INVALID, // 74
    KERN_INVALID, // 75
    KERN_INVALID, // 76
    KERN_INVALID, // 77
    KERN_INVALID, // 78
    KERN_INVALID, // 79
    KERN_INVALID, // 80
    KERN_INVALID, // 81
    KERN_INVALID, // 82
    KERN_INVALID, // 83
    KERN_INVALID, // 84
    KERN_INVALID, // 85
    KERN_INVALID, // 86
    KERN_INVALID, // 87
    KERN_INVALID, // 88
    "mach_timebase_info_trap", // 89
    "mach_wait_until_trap", // 90
    "mk_timer_create_trap", // 91
    "mk_timer_destroy_trap", // 92
    "mk_timer_arm_trap", // 93
    "mk_timer_cancel_trap", // 94
    KERN_INVALID, // 95
    KERN_INVALID, // 96
    KERN_INVALID, // 97
    KERN_INVALID, // 98
    KERN_INVALID, // 99
    KERN_INVALID, // 100
    KERN_INVALID, // 101
    KERN_INVALID, // 102
    KERN_INVALID, // 103
    KERN_INVALID, // 104
    KERN_INVALID, // 105
    KERN_INVALID, // 106
    KERN_INVALID, // 107
    KERN_INVALID, // 108
    KERN_INVALID, // 109
    KERN_INVALID, // 110
    KERN_INVALID, // 111
    KERN_INVALID, // 112
    KERN_INVALID, // 113
    KERN_INVALID, // 114
    KERN_INVALID, // 115
    KERN_INVALID, // 116
    KERN_INVALID, // 117
    KERN_INVALID, // 118
    KERN_INVALID, // 119
    KERN_INVALID, // 120
    KERN_INVALID, // 121
    KERN_INVALID, // 122
    KERN_INVALID, // 123
    KERN_INVALID, // 124
    KERN_INVALID, // 125
    KERN_INVALID, // 126
    KERN_INVALID, // 127
];
