//! The command catalogue rendered onto the sheet.
//!
//! The scanner always appends `<CR>`, so no code below carries a trailing
//! newline; most are `:` ex commands where Enter is expected anyway.

/// One barcode cell: the exact scanned string plus its display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub code: String,
    pub label: String,
    pub description: String,
}

impl CatalogueEntry {
    pub fn new(
        code: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Ordered, immutable list of entries. Order is draw order (row-major).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
}

impl Catalogue {
    pub fn new(entries: Vec<CatalogueEntry>) -> Self {
        Self { entries }
    }

    /// The built-in vim cheat sheet.
    pub fn vim() -> Self {
        VIM_OPS
            .iter()
            .map(|&(code, label, description)| CatalogueEntry::new(code, label, description))
            .collect()
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogueEntry> {
        self.entries.iter()
    }
}

impl FromIterator<CatalogueEntry> for Catalogue {
    fn from_iter<I: IntoIterator<Item = CatalogueEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a CatalogueEntry;
    type IntoIter = std::slice::Iter<'a, CatalogueEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// (code, label, description)
const VIM_OPS: &[(&str, &str, &str)] = &[
    // Files: write / quit / reload / sudo tricks
    (":w", ":w", "Write current file"),
    (":wa", ":wa", "Write all files"),
    (":q", ":q", "Quit (fails if unsaved)"),
    (":wq", ":wq", "Write & quit"),
    (":wqa", ":wqa", "Write & quit all"),
    (":x", ":x", "Write if changed & quit"),
    (":q!", ":q!", "Force quit without saving"),
    (":w!", ":w!", "Force write (read-only files)"),
    (":e!", ":e!", "Reload file (discard changes)"),
    (":up", ":up", "Write only if buffer changed"),
    (":w ++ff=unix", ":w ++ff=unix", "Write with Unix fileformat"),
    (":w ++ff=dos", ":w ++ff=dos", "Write with DOS fileformat"),
    (":!sudo tee %", ":!sudo tee %", "Write as root via sudo tee"),

    // Buffer / file navigation
    (":ls", ":ls", "List buffers"),
    (":bnext", ":bnext", "Next buffer"),
    (":bprev", ":bprev", "Previous buffer"),
    (":bfirst", ":bfirst", "First buffer"),
    (":blast", ":blast", "Last buffer"),
    (":b#", ":b#", "Alternate buffer"),
    (":bd", ":bd", "Delete current buffer"),
    (":bufdo wqa", ":bufdo wqa", "Write & quit all buffers"),
    (":edit .", ":edit .", "Open file explorer (netrw)"),
    (":Explore", ":Explore", "Netrw file explorer"),
    (":Hexplore", ":Hexplore", "Horizontal explorer split"),
    (":Vexplore", ":Vexplore", "Vertical explorer split"),

    // Windows & splits
    (":sp", ":sp", "Horizontal split"),
    (":vsp", ":vsp", "Vertical split"),
    (":only", ":only", "Close all other windows"),
    (":close", ":close", "Close current window"),
    (":new", ":new", "New empty window"),
    (":vnew", ":vnew", "New empty vertical split"),
    (":wincmd = ", ":wincmd =", "Equalize split sizes"),
    (":wincmd H", ":wincmd H", "Move window to far left"),
    (":wincmd J", ":wincmd J", "Move window to bottom"),
    (":wincmd K", ":wincmd K", "Move window to top"),
    (":wincmd L", ":wincmd L", "Move window to far right"),

    // Tabs
    (":tabnew", ":tabnew", "New tab"),
    (":tabclose", ":tabclose", "Close current tab"),
    (":tabonly", ":tabonly", "Close all other tabs"),
    (":tabnext", ":tabnext", "Next tab"),
    (":tabprev", ":tabprev", "Previous tab"),
    (":tabmove 0", ":tabmove 0", "Move tab to front"),
    (":tabmove$", ":tabmove$", "Move tab to end"),

    // Search & highlight behaviour
    (":noh", ":noh", "Clear search highlight"),
    (":set hlsearch", "hlsearch", "Highlight all search matches"),
    (":set nohlsearch", "nohlsearch", "Disable search highlight"),
    (":set incsearch", "incsearch", "Incremental search"),
    (":set noincsearch", "noincsearch", "Disable incremental search"),
    (":set ignorecase", "ignorecase", "Case-insensitive search"),
    (":set noignorecase", "noignorecase", "Case-sensitive search"),
    (":set smartcase", "smartcase", "Smart case search"),
    (":set nosmartcase", "nosmartcase", "Disable smart case"),

    // Indent / tabs / formatting
    (":set autoindent", "autoindent", "Enable auto indent"),
    (":set noautoindent", "noautoindent", "Disable auto indent"),
    (":set smartindent", "smartindent", "Enable smart indent"),
    (":set nosmartindent", "nosmartindent", "Disable smart indent"),
    (":set expandtab", "expandtab", "Convert tabs to spaces"),
    (":set noexpandtab", "noexpandtab", "Keep literal tabs"),
    (":set tabstop=2", "ts=2", "Tab width = 2"),
    (":set tabstop=4", "ts=4", "Tab width = 4"),
    (":set shiftwidth=2", "sw=2", "Indent width = 2"),
    (":set shiftwidth=4", "sw=4", "Indent width = 4"),
    (":set softtabstop=2", "sts=2", "Soft tabstop = 2"),
    (":set softtabstop=4", "sts=4", "Soft tabstop = 4"),
    (":retab", ":retab", "Convert indentation to current settings"),

    // Background / colours / UI tweaks
    (":set background=dark", "bg=dark", "Dark background"),
    (":set background=light", "bg=light", "Light background"),
    (":set number", "number", "Show line numbers"),
    (":set nonumber", "nonumber", "Hide line numbers"),
    (":set relativenumber", "relativenumber", "Relative line numbers"),
    (":set norelativenumber", "norelativenumber", "Disable relative numbers"),
    (":set cursorline", "cursorline", "Highlight current line"),
    (":set nocursorline", "nocursorline", "Disable line highlight"),
    (":set list", "list", "Show invisible chars"),
    (":set nolist", "nolist", "Hide invisible chars"),
    (":set wrap", "wrap", "Wrap long lines"),
    (":set nowrap", "nowrap", "No wrap; horizontal scroll"),
    (":set colorcolumn=80", "cc=80", "Mark column 80"),
    (":set colorcolumn=", "cc=", "Clear colorcolumn"),
    (":set showmatch", "showmatch", "Briefly jump to matching bracket"),
    (":set noshowmatch", "noshowmatch", "Disable showmatch"),
    (":set ruler", "ruler", "Show cursor position"),
    (":set noruler", "noruler", "Hide ruler"),
    (":set showcmd", "showcmd", "Show partial commands"),
    (":set noshowcmd", "noshowcmd", "Hide partial commands"),

    // Spellchecking
    (":set spell", "spell", "Enable spell checking"),
    (":set nospell", "nospell", "Disable spell checking"),
    (":set spelllang=en_au", "spelllang=en_au", "Set spell lang to en_au"),
    (":set spelllang=en_gb", "spelllang=en_gb", "Set spell lang to en_gb"),

    // Mouse / paste / misc convenience
    (":set mouse=a", "mouse=a", "Enable mouse in all modes"),
    (":set mouse=", "mouse=", "Disable mouse"),
    (":set paste", "paste", "Enable paste mode"),
    (":set nopaste", "nopaste", "Disable paste mode"),
    (":set clipboard=unnamedplus", "clipboard=unnamedplus", "Use system clipboard"),
    (":set clipboard=", "clipboard=", "Use default Vim registers"),
    (":set foldmethod=indent", "fold=indent", "Fold by indent level"),
    (":set foldmethod=manual", "fold=manual", "Manual folding"),
    (":set foldenable", "foldenable", "Enable folding"),
    (":set nofoldenable", "nofoldenable", "Disable folding"),

    // Global substitutions & quick refactors
    (":%s/old/new/g", ":%s/old/new/g", "Substitute in whole file"),
    (":%s/old/new/gc", ":%s/old/new/gc", "Substitute with confirm"),
    (":%s/\\s\\+$//e", ":%s/\\s\\+$//e", "Strip trailing whitespace"),
    (":g/DEBUG/d", ":g/DEBUG/d", "Delete all lines containing DEBUG"),
    (":vimgrep /TODO/ **/*", ":vimgrep /TODO/ **/*", "Search TODO in project"),
    (":copen", ":copen", "Open quickfix window"),
    (":cclose", ":cclose", "Close quickfix window"),
];
