//! @dose
//! purpose: Static override tables for signatures the stub annotations cannot express,
//!     mostly observer callbacks whose documented type is a bare `function`.
//!
//! when-editing:
//!     - !Parameter keys are `Class.method.param`, method keys are `Class.method`
//!     - !Keys use the tokens exactly as the declaration tokenizer produces them
//!     - Add callback signatures here when `generate` prints a suggestion for them
//!
//! invariants:
//!     - Tables are built once at startup and only read afterwards
//!     - Entries merged later (from stub2dts.toml) replace built-in entries with the same key
//!
//! gotchas:
//!     - `MidiIn.createNoteInput` declares its variadic tail as `/*...*/masks`, which
//!       tokenizes to `/*` and `*/masks`; the first is suppressed, the second rewritten

use std::collections::HashMap;

/// Replacement for one parameter's rendered text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamOverride {
    /// Drop the parameter from the emitted list
    Suppress,
    /// Render this text instead of `name : type`
    Replace(String),
}

/// Parameters removed from the emitted parameter list
const SUPPRESSED_PARAMETERS: &[&str] = &["MidiIn.createNoteInput./*"];

/// Literal `name : type` text for individual parameters
const PARAMETER_OVERRIDES: &[(&str, &str)] = &[
    ("MidiIn.createNoteInput.*/masks", "...masks: string[]"),
    (
        "MidiIn.setMidiCallback.callback",
        "callback : (status: number, data1: number, data2: number) => void",
    ),
    (
        "Application.addHasActiveEngineObserver.callable",
        "callable : (engineactive : boolean) => void",
    ),
    ("Application.addProjectNameObserver.callback", "callback : (name : string) => void"),
    ("Application.addPanelLayoutObserver.callable", "callable : (layoutName : string) => void"),
    ("Application.addDisplayProfileObserver.callable", "callable : (profileName : string) => void"),
    ("AutomatableRangedValue.addNameObserver.callback", "callback : (name : string) => void"),
    (
        "AutomatableRangedValue.addValueDisplayObserver.callback",
        "callback : (displayValue : string) => void",
    ),
    ("BeatTime.addTimeObserver.callback", "callback : (timeFloat : number) => void"),
    ("BeatTime.addRawValueObserver.callback", "callback : (floatValue : number) => void"),
    ("Browser.addIsBrowsingObserver.callback", "callback : (isbrowsing : boolean) => void"),
    ("BrowserColumn.addExistsObserver.callback", "callback : (exists : boolean ) => void"),
    ("BrowserColumn.addEntryCountObserver.callback", "callback : (count: number ) => void"),
    ("BrowserFilterColumn.addNameObserver.callback", "callback : (name: string ) => void"),
    (
        "BrowserFilterColumnBank.addScrollPositionObserver.callback",
        "callback : (position: number) => void",
    ),
    (
        "BrowserFilterColumnBank.addCanScrollUpObserver.callback",
        "callback : (canscroll: boolean) => void",
    ),
    (
        "BrowserFilterColumnBank.addCanScrollDownObserver.callback",
        "callback : (canscroll: boolean) => void",
    ),
    (
        "BrowserFilterColumnBank.addEntryCountObserver.callback",
        "callback : (count: number) => void",
    ),
    ("BrowserFilterItem.addHitCountObserver.callback", "callback : (count: number) => void"),
    ("BrowserItem.addExistsObserver.callback", "callback : (exists: boolean ) => void"),
    ("BrowserItem.addValueObserver.callback", "callback : (value: string) => void"),
    ("BrowserItemBank.addScrollPositionObserver.callback", "callback : (position: number) => void"),
    ("BrowserItemBank.addCanScrollUpObserver.callback", "callback : (canscroll: boolean) => void"),
    (
        "BrowserItemBank.addCanScrollDownObserver.callback",
        "callback : (canscroll: boolean) => void",
    ),
    ("BrowsingSession.addIsAvailableObserver.callback", "callback : (available: boolean) => void"),
    ("BrowsingSession.addIsActiveObserver.callback", "callback : (active: boolean ) => void"),
    ("BrowsingSession.addHitCountObserver.callback", "callback : (hitcount: number ) => void"),
    (
        "BrowsingSessionBank.addScrollPositionObserver.callback",
        "callback : (position: number) => void",
    ),
    (
        "BrowsingSessionBank.addCanScrollUpObserver.callback",
        "callback : (canscroll: boolean) => void",
    ),
    (
        "BrowsingSessionBank.addCanScrollDownObserver.callback",
        "callback : (canscroll: boolean) => void",
    ),
    ("BrowsingSessionBank.addEntryCountObserver.callback", "callback : (count: number ) => void"),
    ("Channel.addVuMeterObserver.callback", "callback : (value : number) => void"),
    (
        "Channel.addNoteObserver.callback",
        "callback : (onoff: boolean, key: number, velocity: number) => void",
    ),
    (
        "Channel.addColorObserver.callback",
        "callback : (red: number, green: number, blue: number) => void",
    ),
    ("Channel.addIsSelectedInMixerObserver.callback", "callback : (selected: boolean ) => void"),
    (
        "ChannelBank.addChannelScrollPositionObserver.callback",
        "callback : (position: number ) => void",
    ),
    (
        "ChannelBank.addCanScrollChannelsUpObserver.callback",
        "callback : (canscroll: boolean ) => void",
    ),
    (
        "ChannelBank.addCanScrollChannelsDownObserver.callback",
        "callback : (canscroll: boolean ) => void",
    ),
    ("ChannelBank.addChannelCountObserver.callback", "callback : ( count: number) => void"),
    (
        "ChannelBank.addCanScrollSendsUpObserver.callback",
        "callback : (canscroll: boolean ) => void",
    ),
    (
        "ChannelBank.addCanScrollSendsDownObserver.callback",
        "callback : (canscroll: boolean ) => void",
    ),
    ("ChannelBank.addSendCountObserver.callback", "callback : (count: number ) => void"),
    ("Clip.addCanScrollKeysUpObserver.callback", "callback : (canscroll: boolean ) => void"),
    ("Clip.addCanScrollKeysDownObserver.callback", "callback : (canscroll: boolean ) => void"),
    (
        "Clip.addCanScrollStepsBackwardsObserver.callback",
        "callback : (canscroll: boolean ) => void",
    ),
    ("Clip.addCanScrollStepsForwardObserver.callback", "callback : (canscroll: boolean ) => void"),
    (
        "Clip.addStepDataObserver.callback",
        "callback : (x: number, y: number, state: number ) => void",
    ),
    ("Clip.addPlayingStepObserver.callback", "callback : (steppos: number) => void"),
    (
        "Clip.addColorObserver.callback",
        "callback : (red: number, green: number, blue: number ) => void",
    ),
    ("Scene.addClipCountObserver.callback", "callback : (count: number) => void"),
    ("ClipLauncherScenesOrSlots.addNameObserver.callback", "callback : (name: string) => void"),
    (
        "ClipLauncherSlots.addIsSelectedObserver.callback",
        "callback : (index: number, selected: boolean) => void",
    ),
    (
        "ClipLauncherSlots.addHasContentObserver.callback",
        "callback : (index: number, hasContent: boolean ) => void",
    ),
    (
        "ClipLauncherSlots.addPlaybackStateObserver.callback",
        "callback : (index: number, state: number, queued: boolean) => void",
    ),
    (
        "ClipLauncherSlots.addIsPlayingObserver.callback",
        "callback : (index: number, playing: boolean) => void",
    ),
    (
        "ClipLauncherSlots.addIsRecordingObserver.callback",
        "callback : (index: number, recording: boolean) => void",
    ),
    (
        "ClipLauncherSlots.addIsPlaybackQueuedObserver.callback",
        "callback : (index: number, playbackQueued: boolean) => void",
    ),
    (
        "ClipLauncherSlots.addIsRecordingQueuedObserver.callback",
        "callback : (index: number, recordingQueued: boolean) => void",
    ),
    (
        "ClipLauncherSlots.addIsStopQueuedObserver.callback",
        "callback : (index: number, stopQueued: boolean) => void",
    ),
    (
        "ClipLauncherSlots.addColorObserver.callback",
        "callback : (index: number, red: number, green: number, blue: number) => void",
    ),
    ("Cursor.addCanSelectPreviousObserver.callback", "callback : (canSelect: boolean) => void"),
    ("Cursor.addCanSelectNextObserver.callback", "callback : (canSelect: boolean) => void"),
    ("Device.addPositionObserver.callback", "callback : (position: number) => void"),
    (
        "Device.addHasSelectedDeviceObserver.callback",
        "callback : (hasSelectedDevice: boolean) => void",
    ),
    ("Device.addIsPluginObserver.callback", "callback : (isPlugin: boolean) => void"),
    (
        "Device.addPreviousParameterPageEnabledObserver.callback",
        "callback : (enabled: boolean) => void",
    ),
    (
        "Device.addNextParameterPageEnabledObserver.callback",
        "callback : (enabled: boolean) => void",
    ),
    ("Device.addNameObserver.callback", "callback : (name: string) => void"),
    ("Device.addPresetNameObserver.callback", "callback : (name: string) => void"),
    ("Device.addPresetCategoryObserver.callback", "callback : (category: string) => void"),
    ("Device.addPresetCreatorObserver.callback", "callback : (name: string) => void"),
    ("Device.addSelectedPageObserver.callback", "callback : (index: number) => void"),
    ("Device.addActiveModulationSourceObserver.callback", "callback : (name: string) => void"),
    ("Device.addPageNamesObserver.callback", "callback : (name: string) => void"),
    ("Device.addPresetNamesObserver.callback", "callback : (names: string[]) => void"),
    ("Device.addPresetCategoriesObserver.callback", "callback : (categories: string[]) => void"),
    ("Device.addPresetCreatorsObserver.callback", "callback : (creators: string[]) => void"),
    ("Device.addIsEnabledObserver.callback", "callback : (enabled: boolean) => void"),
    ("Device.addSlotsObserver.callback", "callback : (slotnames: string[]) => void"),
    ("Device.addDirectParameterIdObserver.callback", "callback : (parameterIds: string[]) => void"),
    (
        "Device.addDirectParameterNameObserver.callback",
        "callback : (id: string, name: string) => void",
    ),
    (
        "Device.addDirectParameterValueDisplayObserver.callback",
        "callback : (id: string, valueDisplay: string) => void",
    ),
    (
        "Device.addDirectParameterNormalizedValueObserver.callback",
        "callback : (id: string, value: number) => void",
    ),
    ("Device.addSampleNameObserver.callback", "callback : (name: string) => void"),
    ("DeviceBank.addScrollPositionObserver.callback", "callback : (position: number) => void"),
    ("DeviceBank.addCanScrollUpObserver.callback", "callback : (canScroll: boolean) => void"),
    ("DeviceBank.addCanScrollDownObserver.callback", "callback : (canScroll: boolean) => void"),
    ("DeviceBank.addDeviceCountObserver.callback", "callback : (count: number) => void"),
    ("DeviceChain.addNameObserver.callback", "callback : (name: string) => void"),
    (
        "DeviceChain.addIsSelectedInEditorObserver.callback",
        "callback : (selected: boolean) => void",
    ),
    ("GenericBrowsingSession.addNameObserver.callback", "callback : (name: string) => void"),
    ("Host.scheduleTask.callback", "callback : (connection: RemoteConnection ) => void"),
    ("Host.connectToRemoteHost.callback", "callback : ( ) => void"),
    ("Host.addDatagramPacketObserver.callback", "callback : (data) => void"),
    ("Macro.addLabelObserver.callback", "callback : (name: string) => void"),
    ("MidiIn.setSysexCallback.callback", "callback : (data: string) => void"),
    ("ModulationSource.addIsMappingObserver.callback", "callback : (isMapping: boolean) => void"),
    ("ModulationSource.addNameObserver.callback", "callback : (name: string) => void"),
    ("ModulationSource.addIsMappedObserver.callback", "callback : (mapped: boolean) => void"),
    ("NoteLane.addNoteValueObserver.callback", "callback : (value: number) => void"),
    ("NoteLane.addNameObserver.callback", "callback : (name: string ) => void"),
    (
        "NoteLane.addColorObserver.callback",
        "callback : (red: number, green: number, blue: number) => void",
    ),
    (
        "PrimaryDevice.addCanSwitchToDeviceObserver.callback",
        "callback : (canSwitch: boolean) => void",
    ),
    ("RangedValue.addValueObserver.callback", "callback : (value: number) => void"),
    ("RangedValue.addRawValueObserver.callback", "callback : (value: number) => void"),
    ("RemoteConnection.setDisconnectCallback.callback", "callback : ( ) => void"),
    ("RemoteConnection.setReceiveCallback.callback", "callback : (data: number[]) => void"),
    (
        "RemoteSocket.setClientConnectCallback.callback",
        "callback : (connection: RemoteConnection) => void",
    ),
    ("Scene.addPositionObserver.callback", "callback : (position: number) => void"),
    ("Scene.addIsSelectedInEditorObserver.callback", "callback : (selected: boolean) => void"),
    ("SceneBank.addScrollPositionObserver.callback", "callback : (position: number) => void"),
    ("SceneBank.addCanScrollUpObserver.callback", "callback : (canScroll: boolean) => void"),
    ("SceneBank.addCanScrollDownObserver.callback", "callback : (canScroll: boolean) => void"),
    ("SceneBank.addSceneCountObserver.callback", "callback : (count: number) => void"),
    ("Signal.addSignalObserver.callback", "callback : ( ) => void"),
    ("Track.addPositionObserver.callback", "callback : (postion: number) => void"),
    ("Track.addIsQueuedForStopObserver.callback", "callback : (queued: boolean) => void"),
    ("Track.addPitchNamesObserver.callback", "callback : (key: number, name: string) => void"),
    ("Track.addTrackTypeObserver.callback", "callback : (type: string) => void"),
    ("Track.addIsGroupObserver.callback", "callback : (group: boolean) => void"),
    ("TrackBank.addSceneScrollPositionObserver.callback", "callback : (position: number) => void"),
    ("TrackBank.addCanScrollScenesUpObserver.callback", "callback : (canScroll: boolean) => void"),
    (
        "TrackBank.addCanScrollScenesDownObserver.callback",
        "callback : (canScroll: boolean) => void",
    ),
    ("TrackBank.addSceneCountObserver.callback", "callback : (count: number) => void"),
    ("Transport.addIsPlayingObserver.callback", "callback : (playing: boolean) => void"),
    ("Transport.addIsRecordingObserver.callback", "callback : (recording: boolean) => void"),
    ("Transport.addOverdubObserver.callback", "callback : (overdub: boolean) => void"),
    ("Transport.addLauncherOverdubObserver.callback", "callback : (overdub: boolean) => void"),
    ("Transport.addAutomationWriteModeObserver.callback", "callback : (mode: string) => void"),
    (
        "Transport.addIsWritingArrangerAutomationObserver.callback",
        "callback : (writeEnabled: boolean) => void",
    ),
    (
        "Transport.addIsWritingClipLauncherAutomationObserver.callback",
        "callback : (writingClipLauncher: boolean) => void",
    ),
    (
        "Transport.addAutomationOverrideObserver.callback",
        "callback : (automationOverride: boolean) => void",
    ),
    ("Transport.addIsLoopActiveObserver.callback", "callback : (loopActive: boolean) => void"),
    ("Transport.addPunchInObserver.callback", "callback : (enabled: boolean) => void"),
    ("Transport.addPunchOutObserver.callback", "callback : (enabled: boolean ) => void"),
    ("Transport.addClickObserver.callback", "callback : (active: boolean) => void"),
    ("Transport.addMetronomeTicksObserver.callback", "callback : (active: boolean) => void"),
    ("Transport.addMetronomeVolumeObserver.callback", "callback : (value: number) => void"),
    ("Transport.addPreRollClickObserver.callback", "callback : (enabled: boolean) => void"),
    ("Transport.addPreRollObserver.callback", "callback : (enabled: boolean) => void"),
    (
        "Transport.addClipLauncherPostRecordingActionObserver.callback",
        "callback : (status: string) => void",
    ),
    ("Value.addValueObserver.callback", "callback : (value) => void"),
];

/// Literal parameter lists for whole methods
const METHOD_OVERRIDES: &[(&str, &str)] = &[("BooleanValue.toggle", "exclusive?")];

/// Per-parameter and per-method signature overrides
#[derive(Debug, Clone, Default)]
pub struct OverrideTables {
    parameters: HashMap<String, ParamOverride>,
    methods: HashMap<String, String>,
}

impl OverrideTables {
    /// Tables with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tables holding the compiled-in Bitwig overrides
    pub fn builtin() -> Self {
        let mut tables = Self::empty();
        tables.extend_parameters(
            SUPPRESSED_PARAMETERS
                .iter()
                .map(|key| (key.to_string(), ParamOverride::Suppress)),
        );
        tables.extend_parameters(PARAMETER_OVERRIDES.iter().map(|(key, text)| {
            (key.to_string(), ParamOverride::Replace(text.to_string()))
        }));
        tables.extend_methods(
            METHOD_OVERRIDES
                .iter()
                .map(|(key, text)| (key.to_string(), text.to_string())),
        );
        tables
    }

    /// Add parameter overrides; existing keys are replaced
    pub fn extend_parameters<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, ParamOverride)>,
    {
        self.parameters.extend(entries);
    }

    /// Add method overrides; existing keys are replaced
    pub fn extend_methods<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.methods.extend(entries);
    }

    /// Override for `class.method.param`
    pub fn parameter(&self, class: &str, method: &str, param: &str) -> Option<&ParamOverride> {
        self.parameters
            .get(&format!("{}.{}.{}", class, method, param))
    }

    /// Literal parameter list for `class.method`
    pub fn method(&self, class: &str, method: &str) -> Option<&str> {
        self.methods
            .get(&format!("{}.{}", class, method))
            .map(|s| s.as_str())
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}
