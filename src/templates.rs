//! Bundled descriptor templates.
//!
//! These are the fallbacks compiled into the binary. A `template_dir` in the
//! configuration overrides them with same-named files on disk.

/// File names used when loading overrides from a template directory.
pub const SOLUTION_TEMPLATE_NAME: &str = "solution.sln";
pub const PROJECT_TEMPLATE_NAME: &str = "project.vcxproj";
pub const FILTERS_TEMPLATE_NAME: &str = "project.vcxproj.filters";
pub const SETTINGS_TEMPLATE_NAME: &str = "settings.xml";

/// Fallback solution descriptor used when no solution exists yet.
/// Contains an empty post-solution configuration section so the merger
/// always has its insertion anchors.
pub const SOLUTION_TEMPLATE: &str = "\
Microsoft Visual Studio Solution File, Format Version 11.00
# Visual Studio 2010
Global
\tGlobalSection(SolutionConfigurationPlatforms) = preSolution
\t\tDebug|Win32 = Debug|Win32
\t\tRelease|Win32 = Release|Win32
\tEndGlobalSection
\tGlobalSection(ProjectConfigurationPlatforms) = postSolution
\tEndGlobalSection
\tGlobalSection(SolutionProperties) = preSolution
\t\tHideSolutionNode = FALSE
\tEndGlobalSection
EndGlobal
";

/// Makefile-style project descriptor driven by the cross make tool.
/// The generated item group is injected after the first `</ItemGroup>`.
pub const PROJECT_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project DefaultTargets="Build" ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup Label="ProjectConfigurations">
    <ProjectConfiguration Include="Debug|Win32">
      <Configuration>Debug</Configuration>
      <Platform>Win32</Platform>
    </ProjectConfiguration>
    <ProjectConfiguration Include="Release|Win32">
      <Configuration>Release</Configuration>
      <Platform>Win32</Platform>
    </ProjectConfiguration>
  </ItemGroup>
  <PropertyGroup Label="Globals">
    <ProjectGuid>{__PROJECT_GUID__}</ProjectGuid>
    <RootNamespace>__PROJECT_NAME__</RootNamespace>
    <Keyword>MakeFileProj</Keyword>
  </PropertyGroup>
  <Import Project="$(VCTargetsPath)\Microsoft.Cpp.Default.props" />
  <PropertyGroup Condition="'$(Configuration)|$(Platform)'=='Debug|Win32'" Label="Configuration">
    <ConfigurationType>Makefile</ConfigurationType>
    <UseDebugLibraries>true</UseDebugLibraries>
  </PropertyGroup>
  <PropertyGroup Condition="'$(Configuration)|$(Platform)'=='Release|Win32'" Label="Configuration">
    <ConfigurationType>Makefile</ConfigurationType>
    <UseDebugLibraries>false</UseDebugLibraries>
  </PropertyGroup>
  <Import Project="$(VCTargetsPath)\Microsoft.Cpp.props" />
  <PropertyGroup Condition="'$(Configuration)|$(Platform)'=='Debug|Win32'">
    <NMakeBuildCommandLine>"__MAKE_TOOL__" -f Makefile.Debug</NMakeBuildCommandLine>
    <NMakeCleanCommandLine>"__MAKE_TOOL__" -f Makefile.Debug clean</NMakeCleanCommandLine>
    <NMakeReBuildCommandLine>"__MAKE_TOOL__" -f Makefile.Debug clean all</NMakeReBuildCommandLine>
    <NMakeOutput>__PROJECT_NAME__</NMakeOutput>
  </PropertyGroup>
  <PropertyGroup Condition="'$(Configuration)|$(Platform)'=='Release|Win32'">
    <NMakeBuildCommandLine>"__MAKE_TOOL__" -f Makefile.Release</NMakeBuildCommandLine>
    <NMakeCleanCommandLine>"__MAKE_TOOL__" -f Makefile.Release clean</NMakeCleanCommandLine>
    <NMakeReBuildCommandLine>"__MAKE_TOOL__" -f Makefile.Release clean all</NMakeReBuildCommandLine>
    <NMakeOutput>__PROJECT_NAME__</NMakeOutput>
  </PropertyGroup>
  <ItemDefinitionGroup>
    <ClCompile>
      <AdditionalIncludeDirectories>__INCLUDE_DIRS__</AdditionalIncludeDirectories>
    </ClCompile>
  </ItemDefinitionGroup>
  <Import Project="$(VCTargetsPath)\Microsoft.Cpp.targets" />
</Project>
"#;

/// Filter sidecar declaring the logical display folders.
pub const FILTERS_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup>
    <Filter Include="Source Files">
      <UniqueIdentifier>{4FC737F1-C7A5-4376-A066-2A32D752A2FF}</UniqueIdentifier>
      <Extensions>cpp;c;cc;cxx</Extensions>
    </Filter>
    <Filter Include="Header Files">
      <UniqueIdentifier>{93995380-89BD-4b04-88EB-625FBE52EBFB}</UniqueIdentifier>
      <Extensions>h;hh;hpp;hxx</Extensions>
    </Filter>
    <Filter Include="Resource Files">
      <UniqueIdentifier>{67DA6AB6-F800-4c08-8B7A-83BB121AAD01}</UniqueIdentifier>
    </Filter>
    <Filter Include="Generated Files">
      <UniqueIdentifier>{9FB0212A-5E68-4153-9D5C-41D0A78793DA}</UniqueIdentifier>
    </Filter>
  </ItemGroup>
</Project>
"#;

/// One remote-debugger preferences block, rendered once per configuration.
pub const SETTINGS_TEMPLATE: &str = r#"  <configuration name="__PROJECT_NAME__ - __CONFIGURATION_NAME__">
    <target>
      <address>__TARGET_ADDR__</address>
      <transport>ssh</transport>
    </target>
    <debugger>
      <path>__TOOLCHAIN_PATH__</path>
      <mode>remote</mode>
    </debugger>
  </configuration>
"#;
